use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::types::errors::ValidationError;

/// A stored website/username/password entry.
///
/// `id` is assigned by the remote store at creation and never reused;
/// `owner_id` is set from the creating session and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: String,
    pub owner_id: String,
    pub site_label: String,
    pub site_url: String,
    pub username: String,
    pub secret: String,
}

impl CredentialRecord {
    /// Overwrites the secret in place before the record is discarded.
    pub fn wipe_secret(&mut self) {
        self.secret.zeroize();
    }
}

/// The mutable fields of a credential, without `id`/`owner_id`.
///
/// Used both for create submissions and for partial updates keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDraft {
    pub site_label: String,
    pub site_url: String,
    pub username: String,
    pub secret: String,
}

impl CredentialDraft {
    /// Builds a draft from form input, deriving the display label from the URL.
    pub fn from_form(site_url: &str, username: &str, secret: &str) -> Self {
        Self {
            site_label: site_label_from_url(site_url),
            site_url: site_url.to_string(),
            username: username.to_string(),
            secret: secret.to_string(),
        }
    }

    /// Entry-time validation: the URL must be well-formed and the secret
    /// non-empty. Called at form-submission time — failures never reach
    /// the sync layer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_well_formed_url(&self.site_url) {
            return Err(ValidationError::MalformedUrl(self.site_url.clone()));
        }
        if self.username.trim().is_empty() {
            return Err(ValidationError::EmptyField("username".to_string()));
        }
        if self.secret.is_empty() {
            return Err(ValidationError::EmptyField("password".to_string()));
        }
        Ok(())
    }

    /// Extracts the draft's fields from an existing record, for edit flows.
    pub fn from_record(record: &CredentialRecord) -> Self {
        Self {
            site_label: record.site_label.clone(),
            site_url: record.site_url.clone(),
            username: record.username.clone(),
            secret: record.secret.clone(),
        }
    }
}

/// Checks that a URL has an http/https scheme and a non-empty host.
pub fn is_well_formed_url(url: &str) -> bool {
    let rest = match url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) {
        Some(r) => r,
        None => return false,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && !host.starts_with('.') && !host.contains(' ')
}

/// Derives a display label from a URL: the host without a leading `www.`.
/// Falls back to the input unchanged when the URL has no recognizable host.
pub fn site_label_from_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        url.to_string()
    } else {
        host.to_string()
    }
}

/// Options for generating a random password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordGenOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

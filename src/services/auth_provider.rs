//! Identity provider for PassVault.
//!
//! The real provider is an external service; this module defines the
//! contract the rest of the app consumes (sign-in/sign-up/sign-out plus a
//! subscribable identity-changed notification) and an in-process
//! implementation backing the demo and tests. Provider failures map to
//! user-facing friendly messages via [`AuthError`]'s `Display`.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::watch;
use uuid::Uuid;

use crate::types::errors::AuthError;
use crate::types::identity::Identity;

/// Minimum accepted password length, matching the provider's weak-password rule.
const MIN_SECRET_LEN: usize = 6;

/// Trait defining identity provider operations.
pub trait AuthProviderTrait {
    fn sign_up(&self, email: &str, secret: &str) -> Result<Identity, AuthError>;
    fn sign_in_with_password(&self, email: &str, secret: &str) -> Result<Identity, AuthError>;
    fn sign_out(&self);
    fn current_identity(&self) -> Option<Identity>;
    /// Subscribes to identity-changed notifications. The receiver observes
    /// `Some(identity)` after sign-in and `None` after sign-out.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}

struct Account {
    identity_id: String,
    secret: String,
}

/// In-process identity provider.
///
/// Identity ids are minted once per email and reused on every subsequent
/// sign-in, so the same account always resolves to the same identity.
pub struct AuthProvider {
    accounts: Mutex<HashMap<String, Account>>,
    identity_tx: watch::Sender<Option<Identity>>,
}

impl AuthProvider {
    pub fn new() -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(HashMap::new()),
            identity_tx,
        }
    }

    fn is_plausible_email(email: &str) -> bool {
        let mut parts = email.splitn(2, '@');
        let local = parts.next().unwrap_or("");
        let domain = parts.next().unwrap_or("");
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    }
}

impl Default for AuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProviderTrait for AuthProvider {
    fn sign_up(&self, email: &str, secret: &str) -> Result<Identity, AuthError> {
        if !Self::is_plausible_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::WeakPassword);
        }

        let mut accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
        if accounts.contains_key(email) {
            return Err(AuthError::EmailInUse);
        }

        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        accounts.insert(
            email.to_string(),
            Account {
                identity_id: identity.id.clone(),
                secret: secret.to_string(),
            },
        );
        drop(accounts);

        // Sign-up also signs the new account in, like the reference flow.
        let _ = self.identity_tx.send(Some(identity.clone()));
        Ok(identity)
    }

    fn sign_in_with_password(&self, email: &str, secret: &str) -> Result<Identity, AuthError> {
        let accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());

        // Unknown email and wrong password are deliberately the same error.
        let account = accounts.get(email).ok_or(AuthError::InvalidCredential)?;
        if account.secret != secret {
            return Err(AuthError::InvalidCredential);
        }

        let identity = Identity {
            id: account.identity_id.clone(),
            email: email.to_string(),
        };
        drop(accounts);

        let _ = self.identity_tx.send(Some(identity.clone()));
        Ok(identity)
    }

    fn sign_out(&self) {
        let _ = self.identity_tx.send(None);
    }

    fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }
}

//! Legacy local-only persistence.
//!
//! The whole record list lives under a single JSON file, overwritten
//! wholesale on every save. Kept for the local-only variant of the app;
//! the synced variant treats the remote store as the sole source of truth.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::credential::CredentialRecord;
use crate::types::errors::VaultError;

/// File-backed vault holding the full JSON-encoded record list.
pub struct LocalVault {
    vault_path: String,
}

impl LocalVault {
    /// Creates a new LocalVault.
    ///
    /// If `path_override` is `Some`, uses that path for the vault file.
    /// Otherwise, uses the platform config directory with `vault.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let vault_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("vault.json")
                .to_string_lossy()
                .to_string(),
        };
        Self { vault_path }
    }

    /// Loads the full record list from the vault file.
    ///
    /// A missing file loads as an empty list; a malformed file is an error.
    pub fn load(&self) -> Result<Vec<CredentialRecord>, VaultError> {
        let path = Path::new(&self.vault_path);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| VaultError::IoError(format!("Failed to read vault file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| VaultError::SerializationError(format!("Failed to parse vault file: {}", e)))
    }

    /// Writes the full record list, replacing any previous file contents.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, records: &[CredentialRecord]) -> Result<(), VaultError> {
        let path = Path::new(&self.vault_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                VaultError::IoError(format!("Failed to create vault directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(records).map_err(|e| {
            VaultError::SerializationError(format!("Failed to serialize records: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| VaultError::IoError(format!("Failed to write vault file: {}", e)))?;

        Ok(())
    }

    /// Path of the backing file.
    pub fn vault_path(&self) -> &str {
        &self.vault_path
    }
}

// PassVault platform paths
// Config: ~/.config/passvault
// Data:   ~/.local/share/passvault

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PassVault.
/// Uses `$XDG_CONFIG_HOME/passvault` if set, otherwise `~/.config/passvault`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("passvault")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("passvault")
    }
}

/// Returns the data directory for PassVault.
/// Uses `$XDG_DATA_HOME/passvault` if set, otherwise `~/.local/share/passvault`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("passvault")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("passvault")
    }
}

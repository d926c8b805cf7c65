//! Connection settings for the bundled IMAP backend.
//!
//! A plain data struct: the library never searches standard locations or
//! reads environment variables. Callers either build the struct directly
//! or point [`ImapConfig::load`] at a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LensError, Result};

/// Settings for [`ImapSession::connect`](crate::source::imap::ImapSession::connect).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImapConfig {
    /// IMAP server hostname.
    pub host: String,
    /// IMAP server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Folder to select after login.
    #[serde(default = "default_folder")]
    pub folder: String,
}

fn default_port() -> u16 {
    993
}

fn default_folder() -> String {
    "INBOX".to_string()
}

impl ImapConfig {
    /// Load settings from a TOML file at an explicit path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LensError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| LensError::io(path, e))?;
        let config: Self = toml::from_str(&contents).map_err(|e| LensError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), host = %config.host, "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_applied() {
        let config: ImapConfig = toml::from_str(
            r#"
host = "imap.example.com"
username = "user"
password = "secret"
"#,
        )
        .expect("parse minimal config");
        assert_eq!(config.port, 993);
        assert_eq!(config.folder, "INBOX");
    }

    #[test]
    fn test_explicit_values_win() {
        let config: ImapConfig = toml::from_str(
            r#"
host = "imap.example.com"
port = 143
username = "user"
password = "secret"
folder = "Archive"
"#,
        )
        .expect("parse full config");
        assert_eq!(config.port, 143);
        assert_eq!(config.folder, "Archive");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ImapConfig::load("/nonexistent/imaplens.toml").unwrap_err();
        assert!(matches!(err, LensError::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "host = \"imap.example.com\"\nusername = \"u\"\npassword = \"p\""
        )
        .expect("write config");

        let config = ImapConfig::load(file.path()).expect("load config");
        assert_eq!(config.host, "imap.example.com");
        assert_eq!(config.port, 993);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "host = ").expect("write config");

        let err = ImapConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LensError::InvalidConfig { .. }));
    }
}

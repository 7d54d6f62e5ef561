//! Sender-facing message configuration.
//!
//! Every text the dispatcher produces on its own (denials, usage lines, error
//! prefixes) comes from a [`MessageConfig`]. The defaults use Minecraft-style
//! `§` colour codes; hosts that render plain text can load a TOML file with
//! empty prefixes:
//!
//! ```toml
//! error_prefix = ""
//! usage_prefix = "Usage: "
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading message configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Texts and prefixes used when talking to senders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Prepended to every error line.
    pub error_prefix: String,

    /// Prepended to the usage line.
    pub usage_prefix: String,

    /// Prepended to the root command name in usage lines.
    pub command_prefix: String,

    /// Sent when the root permission check fails and the command has no
    /// message of its own.
    pub permission_denied: String,

    /// Sent when a subcommand permission check fails and the subcommand has
    /// no message of its own.
    pub subcommand_permission_denied: String,

    /// Sent (after the error prefix) when a handler returns an error.
    pub handler_failed: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            error_prefix: "§c".to_string(),
            usage_prefix: "§eCorrect usage: §f".to_string(),
            command_prefix: "/".to_string(),
            permission_denied: "§cYou don't have permission to use this command.".to_string(),
            subcommand_permission_denied: "§cYou don't have permission to use this subcommand."
                .to_string(),
            handler_failed: "An internal error occurred while running this command.".to_string(),
        }
    }
}

impl MessageConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: "<string>".to_string(),
            source,
        })
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Configuration without colour codes.
    pub fn plain() -> Self {
        Self {
            error_prefix: String::new(),
            usage_prefix: "Correct usage: ".to_string(),
            command_prefix: "/".to_string(),
            permission_denied: "You don't have permission to use this command.".to_string(),
            subcommand_permission_denied: "You don't have permission to use this subcommand."
                .to_string(),
            handler_failed: "An internal error occurred while running this command.".to_string(),
        }
    }

    /// Format an error line.
    pub fn error(&self, message: impl AsRef<str>) -> String {
        format!("{}{}", self.error_prefix, message.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MessageConfig::from_toml_str(
            r#"
error_prefix = "! "
command_prefix = ""
"#,
        )
        .unwrap();

        assert_eq!(config.error_prefix, "! ");
        assert_eq!(config.command_prefix, "");
        assert_eq!(config.usage_prefix, MessageConfig::default().usage_prefix);
        assert_eq!(config.error("Too many arguments."), "! Too many arguments.");
    }

    #[test]
    fn test_invalid_toml() {
        let err = MessageConfig::from_toml_str("error_prefix = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "usage_prefix = \"Usage: \"").unwrap();

        let config = MessageConfig::load(file.path()).unwrap();
        assert_eq!(config.usage_prefix, "Usage: ");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MessageConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_plain_has_no_colour_codes() {
        let plain = MessageConfig::plain();
        let toml = toml::to_string(&plain).unwrap();
        assert!(!toml.contains('§'));
    }
}

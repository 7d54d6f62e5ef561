//! Host configuration file.
//!
//! ```toml
//! [messages]
//! error_prefix = "§c"
//!
//! [console]
//! name = "CONSOLE"
//! permissions = ["team.use", "team.manage"]
//!
//! [entities]
//! online = ["Steve", "Alex"]
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use anyhow::{Context, Result};
use commandox_core::MessageConfig;
use serde::{Deserialize, Serialize};

/// Permission tag that grants everything.
pub const WILDCARD_PERMISSION: &str = "*";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub messages: MessageConfig,
    pub console: ConsoleConfig,
    pub entities: EntitiesConfig,
}

/// Identity of the console sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub name: String,
    /// Granted permission tags; `"*"` grants all.
    pub permissions: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: "CONSOLE".to_string(),
            permissions: vec![WILDCARD_PERMISSION.to_string()],
        }
    }
}

/// Entities considered online at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitiesConfig {
    pub online: Vec<String>,
}

impl HostConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse host config")
    }

    /// Load the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}

//! Command-line arguments for the console host.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How much the host logs to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level named by `COMMANDOX_LOG_LEVEL`, accepting the same spellings as
    /// `--log-level` in any case.
    pub fn from_env_value(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }

    /// `EnvFilter` directives: other crates stay at `warn`, the commandox
    /// crates log at this level.
    pub fn env_filter(self) -> String {
        let level = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        format!("warn,commandox_core={level},commandox_cli={level}")
    }
}

/// Console host for commandox commands.
///
/// Reads one command per line from stdin (a leading `/` is optional) and
/// prints whatever the command sends back.
#[derive(Debug, Parser)]
#[command(name = "commandox")]
#[command(author, version)]
#[command(about = "Run commandox commands from a console", long_about = None)]
pub struct Cli {
    /// Path to a TOML file with [messages], [console] and [entities] tables
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a single command line and exit
    #[arg(long = "exec", short = 'e', value_name = "LINE")]
    pub exec: Option<String>,

    /// Print colour codes instead of stripping them
    #[arg(long = "raw-codes")]
    pub raw_codes: bool,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Log verbosity
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Effective log level from flags and `COMMANDOX_LOG_LEVEL`.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else if let Ok(env_level) = std::env::var("COMMANDOX_LOG_LEVEL") {
            LogLevel::from_env_value(&env_level).unwrap_or(self.log_level)
        } else {
            self.log_level
        }
    }
}

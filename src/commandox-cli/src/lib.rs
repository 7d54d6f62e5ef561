//! Commandox console host.
//!
//! Reads command lines from a console, routes them to the registered root
//! commands and prints what the commands send back.
//!
//! - `cli` - Command-line argument parsing
//! - `config` - Host configuration file
//! - `console` - The console [`CommandSender`](commandox_core::CommandSender)
//! - `demo` - Sample `/team` and `/online` commands
//! - `host` - Routing input lines to dispatchers

pub mod cli;
pub mod config;
pub mod console;
pub mod demo;
pub mod host;

pub use cli::{Cli, LogLevel};
pub use config::HostConfig;
pub use console::{ConsoleSender, strip_codes};
pub use host::Host;

//! Typed subcommand dispatch for text commands.
//!
//! This crate turns a command line such as `/team group add Steve admin`
//! into a call to the right handler with typed, validated arguments, or into
//! a precise message telling the sender what went wrong.
//!
//! # Overview
//!
//! - [`Argument`] / [`ArgumentList`]: typed positional arguments (boolean,
//!   integer, enum, string, raw text, entity reference).
//! - [`SubCommand`] / [`RootCommand`]: immutable definitions built with
//!   builders. A root command indexes its subcommands by lowercase name and
//!   alias; aliases may be two words long (`"group add"`).
//! - [`bind`]: binds words to an argument list.
//! - [`Dispatcher`]: permission checks, subcommand resolution, binding,
//!   usage messages and handler invocation.
//!
//! # Example
//!
//! ```rust,ignore
//! use commandox_core::prelude::*;
//!
//! let add = SubCommand::builder("add")
//!     .alias("group add")
//!     .permission("team.manage")
//!     .arguments(ArgumentList::new([
//!         Argument::entity("target"),
//!         Argument::one_of("role", ["member", "officer"]).optional(),
//!     ])?)
//!     .on_run(|ctx| {
//!         let target = ctx.args().entity("target").unwrap_or_default();
//!         ctx.reply(format!("Added {target}"));
//!         Ok(())
//!     })
//!     .build()?;
//!
//! let root = RootCommand::builder("team")
//!     .alias("t")
//!     .subcommand(add)
//!     .on_run(|ctx| {
//!         ctx.reply("Try /team add <player>");
//!         Ok(())
//!     })
//!     .build()?;
//!
//! let dispatcher = Dispatcher::new(root).with_entities(Arc::new(online));
//! dispatcher.execute(&sender, "team", &split_words("group add ste officer"));
//! ```

pub mod alias;
pub mod argument;
mod binder;
pub mod config;
mod context;
mod definition;
mod dispatcher;
pub mod error;
mod parsed;
pub mod resolver;
pub mod sender;

pub use alias::AliasIndex;
pub use argument::{ArgValue, Argument, ArgumentKind, ArgumentList, ArgumentListBuilder, ParseScope};
pub use binder::bind;
pub use config::{ConfigError, ConfigResult, MessageConfig};
pub use context::{CommandHandler, InvocationContext};
pub use definition::{RootCommand, RootCommandBuilder, SubCommand, SubCommandBuilder};
pub use dispatcher::{Dispatcher, Outcome, split_words};
pub use error::{ArgumentError, DefinitionError};
pub use parsed::ParsedArguments;
pub use sender::{CommandSender, EntityRegistry, NoEntities, OnlineEntities};

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::{
        ArgValue, Argument, ArgumentList, CommandHandler, CommandSender, DefinitionError,
        Dispatcher, EntityRegistry, InvocationContext, MessageConfig, OnlineEntities, Outcome,
        RootCommand, SubCommand, split_words,
    };
    pub use std::sync::Arc;
}

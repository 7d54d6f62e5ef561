//! Invocation context and the handler trait.

use std::any::Any;

use crate::argument::ArgValue;
use crate::definition::{RootCommand, SubCommand};
use crate::parsed::ParsedArguments;
use crate::sender::CommandSender;

/// Everything a handler needs to know about one invocation.
///
/// Built by the dispatcher after a successful binding and dropped once the
/// handler returns.
pub struct InvocationContext<'a> {
    sender: &'a dyn CommandSender,
    label: &'a str,
    args: ParsedArguments,
    root: &'a RootCommand,
    subcommand: Option<&'a SubCommand>,
    owner: Option<&'a (dyn Any + Send + Sync)>,
}

impl<'a> InvocationContext<'a> {
    pub fn new(
        sender: &'a dyn CommandSender,
        label: &'a str,
        args: ParsedArguments,
        root: &'a RootCommand,
        subcommand: Option<&'a SubCommand>,
    ) -> Self {
        Self {
            sender,
            label,
            args,
            root,
            subcommand,
            owner: None,
        }
    }

    /// Attach the opaque owner handle.
    pub fn with_owner(mut self, owner: Option<&'a (dyn Any + Send + Sync)>) -> Self {
        self.owner = owner;
        self
    }

    pub fn sender(&self) -> &'a dyn CommandSender {
        self.sender
    }

    /// The root name or alias the sender typed.
    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn args(&self) -> &ParsedArguments {
        &self.args
    }

    /// Bound value for `name`, if any.
    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }

    pub fn root(&self) -> &'a RootCommand {
        self.root
    }

    /// The subcommand that was resolved, or `None` when the root handles the call.
    pub fn subcommand(&self) -> Option<&'a SubCommand> {
        self.subcommand
    }

    /// The owner handle, if it has type `T`.
    pub fn owner<T: Any>(&self) -> Option<&'a T> {
        self.owner.and_then(|owner| owner.downcast_ref::<T>())
    }

    /// Send a message back to the sender.
    pub fn reply(&self, message: impl AsRef<str>) {
        self.sender.send_message(message.as_ref());
    }
}

/// Code run when a command or subcommand is invoked.
///
/// Errors returned here never reach the host: the dispatcher logs them and
/// tells the sender the command failed.
pub trait CommandHandler: Send + Sync {
    fn run(&self, ctx: &InvocationContext<'_>) -> anyhow::Result<()>;
}

impl<F> CommandHandler for F
where
    F: Fn(&InvocationContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    fn run(&self, ctx: &InvocationContext<'_>) -> anyhow::Result<()> {
        self(ctx)
    }
}

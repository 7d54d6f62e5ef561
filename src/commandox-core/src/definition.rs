//! Root command and subcommand definitions.
//!
//! Definitions are assembled with builders and are immutable afterwards. A
//! [`RootCommand`] owns its subcommands and the [`AliasIndex`] over their
//! names, so it can be shared across threads without locking.

use std::fmt;
use std::sync::Arc;

use crate::alias::{AliasIndex, normalize_alias};
use crate::argument::ArgumentList;
use crate::context::{CommandHandler, InvocationContext};
use crate::error::DefinitionError;
use crate::resolver::{self, SubCommandMatch};
use crate::sender::CommandSender;

fn allowed(permission: Option<&str>, sender: &dyn CommandSender) -> bool {
    match permission {
        None | Some("") => true,
        Some(permission) => sender.has_permission(permission),
    }
}

// ============================================================
// SUBCOMMAND
// ============================================================

/// A secondary action under a root command, e.g. `/team add`.
pub struct SubCommand {
    name: String,
    aliases: Vec<String>,
    description: String,
    permission: Option<String>,
    permission_message: Option<String>,
    arguments: ArgumentList,
    handler: Arc<dyn CommandHandler>,
}

impl SubCommand {
    pub fn builder(name: impl Into<String>) -> SubCommandBuilder {
        SubCommandBuilder {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            permission: None,
            permission_message: None,
            arguments: ArgumentList::empty(),
            handler: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aliases as declared; one or two words each.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Custom message shown when the sender lacks [`Self::permission`].
    pub fn permission_message(&self) -> Option<&str> {
        self.permission_message.as_deref()
    }

    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }

    /// Whether `sender` may run this subcommand. No permission means everyone may.
    pub fn check_permission(&self, sender: &dyn CommandSender) -> bool {
        allowed(self.permission(), sender)
    }

    pub(crate) fn run(&self, ctx: &InvocationContext<'_>) -> anyhow::Result<()> {
        self.handler.run(ctx)
    }
}

impl fmt::Debug for SubCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubCommand")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("permission", &self.permission)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SubCommand`].
pub struct SubCommandBuilder {
    name: String,
    aliases: Vec<String>,
    description: String,
    permission: Option<String>,
    permission_message: Option<String>,
    arguments: ArgumentList,
    handler: Option<Arc<dyn CommandHandler>>,
}

impl SubCommandBuilder {
    /// Add an alias. Two-word aliases such as `"group add"` are allowed.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn permission_message(mut self, message: impl Into<String>) -> Self {
        self.permission_message = Some(message.into());
        self
    }

    pub fn arguments(mut self, arguments: ArgumentList) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn handler(mut self, handler: impl CommandHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Use a closure as the handler.
    pub fn on_run<F>(self, f: F) -> Self
    where
        F: Fn(&InvocationContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.handler(f)
    }

    pub fn build(self) -> Result<SubCommand, DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.name.split_whitespace().count() > 1 {
            return Err(DefinitionError::InvalidAlias(self.name));
        }
        for alias in &self.aliases {
            normalize_alias(alias)?;
        }
        let handler = self
            .handler
            .ok_or_else(|| DefinitionError::MissingHandler(self.name.clone()))?;

        Ok(SubCommand {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            permission: self.permission,
            permission_message: self.permission_message,
            arguments: self.arguments,
            handler,
        })
    }
}

// ============================================================
// ROOT COMMAND
// ============================================================

/// The top-level command a sender types first, e.g. `/team`.
pub struct RootCommand {
    name: String,
    aliases: Vec<String>,
    description: String,
    permission: Option<String>,
    permission_message: Option<String>,
    arguments: ArgumentList,
    subcommands: Vec<SubCommand>,
    index: AliasIndex,
    handler: Arc<dyn CommandHandler>,
}

impl RootCommand {
    pub fn builder(name: impl Into<String>) -> RootCommandBuilder {
        RootCommandBuilder {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            permission: None,
            permission_message: None,
            arguments: ArgumentList::empty(),
            subcommands: Vec::new(),
            handler: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative root labels the host registers the command under.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn permission_message(&self) -> Option<&str> {
        self.permission_message.as_deref()
    }

    /// Arguments bound when no subcommand is addressed.
    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }

    /// Subcommands in registration order.
    pub fn subcommands(&self) -> &[SubCommand] {
        &self.subcommands
    }

    pub fn alias_index(&self) -> &AliasIndex {
        &self.index
    }

    /// Look up a subcommand by name or alias, case-insensitively.
    pub fn subcommand(&self, name: &str) -> Option<&SubCommand> {
        self.index.lookup(name).map(|slot| &self.subcommands[slot])
    }

    /// Resolve the subcommand addressed by the leading words, returning it
    /// with the number of words naming it.
    pub fn resolve(&self, words: &[&str]) -> Option<(&SubCommand, usize)> {
        resolver::resolve(&self.index, words)
            .map(|SubCommandMatch { slot, consumed }| (&self.subcommands[slot], consumed))
    }

    /// Whether `label` is this command's name or one of its aliases.
    /// Case-insensitive, with the same Unicode lowercasing as subcommand lookup.
    pub fn answers_to(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        std::iter::once(&self.name)
            .chain(self.aliases.iter())
            .any(|name| name.to_lowercase() == label)
    }

    pub fn check_permission(&self, sender: &dyn CommandSender) -> bool {
        allowed(self.permission(), sender)
    }

    pub(crate) fn run(&self, ctx: &InvocationContext<'_>) -> anyhow::Result<()> {
        self.handler.run(ctx)
    }
}

impl fmt::Debug for RootCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootCommand")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("permission", &self.permission)
            .field("arguments", &self.arguments)
            .field("subcommands", &self.subcommands)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RootCommand`].
pub struct RootCommandBuilder {
    name: String,
    aliases: Vec<String>,
    description: String,
    permission: Option<String>,
    permission_message: Option<String>,
    arguments: ArgumentList,
    subcommands: Vec<SubCommand>,
    handler: Option<Arc<dyn CommandHandler>>,
}

impl RootCommandBuilder {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Message shown instead of the configured default when permission is denied.
    pub fn permission_message(mut self, message: impl Into<String>) -> Self {
        self.permission_message = Some(message.into());
        self
    }

    pub fn arguments(mut self, arguments: ArgumentList) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn subcommand(mut self, subcommand: SubCommand) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    pub fn handler(mut self, handler: impl CommandHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn on_run<F>(self, f: F) -> Self
    where
        F: Fn(&InvocationContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.handler(f)
    }

    pub fn build(self) -> Result<RootCommand, DefinitionError> {
        let labels = std::iter::once(&self.name).chain(self.aliases.iter());
        for label in labels {
            if label.trim().is_empty() {
                return Err(DefinitionError::EmptyName);
            }
            if label.split_whitespace().count() > 1 {
                return Err(DefinitionError::InvalidAlias(label.clone()));
            }
        }

        let index = AliasIndex::build(&self.subcommands)?;
        let handler = self
            .handler
            .ok_or_else(|| DefinitionError::MissingHandler(self.name.clone()))?;

        Ok(RootCommand {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            permission: self.permission,
            permission_message: self.permission_message,
            arguments: self.arguments,
            subcommands: self.subcommands,
            index,
            handler,
        })
    }
}

//! Command dispatch.
//!
//! The [`Dispatcher`] is the entry point a host calls for each command event.
//! An invocation walks through:
//!
//! 1. the root permission check;
//! 2. subcommand resolution over the leading words;
//! 3. the subcommand permission check, when one was resolved;
//! 4. argument binding against the chosen definition;
//! 5. handler invocation.
//!
//! Every path ends with the invocation handled. Failures are reported to the
//! sender as text and summarised in the returned [`Outcome`].

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::argument::ParseScope;
use crate::binder::bind;
use crate::config::MessageConfig;
use crate::context::InvocationContext;
use crate::definition::{RootCommand, SubCommand};
use crate::error::ArgumentError;
use crate::sender::{CommandSender, EntityRegistry, NoEntities};

/// How an invocation ended. All outcomes mean the command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The handler ran and returned successfully.
    Executed,
    /// The root or subcommand permission check failed.
    PermissionDenied,
    /// Binding failed; the sender was shown the error (and usage, when relevant).
    InvalidArguments,
    /// The handler returned an error.
    HandlerFailed,
}

/// Split a command line on whitespace. There is no quoting.
pub fn split_words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Runs invocations of one root command.
pub struct Dispatcher {
    root: RootCommand,
    entities: Arc<dyn EntityRegistry>,
    messages: MessageConfig,
    owner: Option<Arc<dyn Any + Send + Sync>>,
}

impl Dispatcher {
    /// Dispatcher with no online entities and default messages.
    pub fn new(root: RootCommand) -> Self {
        Self {
            root,
            entities: Arc::new(NoEntities),
            messages: MessageConfig::default(),
            owner: None,
        }
    }

    /// Registry consulted by entity arguments.
    pub fn with_entities(mut self, entities: Arc<dyn EntityRegistry>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_messages(mut self, messages: MessageConfig) -> Self {
        self.messages = messages;
        self
    }

    /// Opaque handle made available to handlers through
    /// [`InvocationContext::owner`].
    pub fn with_owner<T: Any + Send + Sync>(mut self, owner: Arc<T>) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn root(&self) -> &RootCommand {
        &self.root
    }

    pub fn messages(&self) -> &MessageConfig {
        &self.messages
    }

    /// Run one invocation.
    ///
    /// `label` is the name or alias the sender typed; `words` is the rest of
    /// the command line split on whitespace.
    pub fn execute<S: AsRef<str>>(
        &self,
        sender: &dyn CommandSender,
        label: &str,
        words: &[S],
    ) -> Outcome {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        let root = &self.root;

        if !root.check_permission(sender) {
            debug!(
                command = root.name(),
                sender = sender.name(),
                "root permission denied"
            );
            let message = root
                .permission_message()
                .unwrap_or(&self.messages.permission_denied);
            sender.send_message(message);
            return Outcome::PermissionDenied;
        }

        let subcommand = match root.resolve(&words) {
            Some((sub, consumed)) => {
                debug!(
                    command = root.name(),
                    subcommand = sub.name(),
                    consumed,
                    "resolved subcommand"
                );
                if !sub.check_permission(sender) {
                    debug!(
                        command = root.name(),
                        subcommand = sub.name(),
                        sender = sender.name(),
                        "subcommand permission denied"
                    );
                    let message = sub
                        .permission_message()
                        .unwrap_or(&self.messages.subcommand_permission_denied);
                    sender.send_message(message);
                    return Outcome::PermissionDenied;
                }
                Some((sub, consumed))
            }
            None => None,
        };

        let (arguments, remaining) = match subcommand {
            Some((sub, consumed)) => (sub.arguments(), &words[consumed..]),
            None => (root.arguments(), &words[..]),
        };
        let subcommand = subcommand.map(|(sub, _)| sub);

        let scope = ParseScope::new(sender, self.entities.as_ref());
        let parsed = match bind(arguments, remaining, &scope) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.report_binding_error(sender, subcommand, &err);
                return Outcome::InvalidArguments;
            }
        };

        let ctx = InvocationContext::new(sender, label, parsed, root, subcommand)
            .with_owner(self.owner.as_deref());
        let result = match subcommand {
            Some(sub) => sub.run(&ctx),
            None => root.run(&ctx),
        };

        match result {
            Ok(()) => Outcome::Executed,
            Err(err) => {
                warn!(
                    command = root.name(),
                    subcommand = subcommand.map(SubCommand::name),
                    sender = sender.name(),
                    error = %err,
                    "command handler failed"
                );
                sender.send_message(&self.messages.error(&self.messages.handler_failed));
                Outcome::HandlerFailed
            }
        }
    }

    /// Usage line for the root command or one of its subcommands, e.g.
    /// `§eCorrect usage: §f/team add <target:player> [role:string]`.
    pub fn usage_line(&self, subcommand: Option<&SubCommand>) -> String {
        let mut line = format!(
            "{}{}{}",
            self.messages.usage_prefix,
            self.messages.command_prefix,
            self.root.name()
        );

        let arguments = match subcommand {
            Some(sub) => {
                line.push(' ');
                line.push_str(sub.name());
                sub.arguments()
            }
            None => self.root.arguments(),
        };

        let usage = arguments.usage();
        if !usage.is_empty() {
            line.push(' ');
            line.push_str(&usage);
        }
        line
    }

    /// Completion candidates for the next word of `words`.
    ///
    /// Offers subcommand keys for the first word and the static suggestions
    /// of the argument at the next position otherwise.
    pub fn suggestions<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();

        if words.is_empty() {
            let mut names: Vec<String> = self
                .root
                .alias_index()
                .keys()
                .into_iter()
                .map(str::to_string)
                .collect();
            if let Some(first) = self.root.arguments().at(0) {
                names.extend(first.suggestions(self.entities.as_ref()));
            }
            return names;
        }

        let (arguments, position) = match self.root.resolve(&words) {
            Some((sub, consumed)) => (sub.arguments(), words.len() - consumed),
            None => (self.root.arguments(), words.len()),
        };

        arguments
            .at(position)
            .map(|arg| arg.suggestions(self.entities.as_ref()))
            .unwrap_or_default()
    }

    fn report_binding_error(
        &self,
        sender: &dyn CommandSender,
        subcommand: Option<&SubCommand>,
        err: &ArgumentError,
    ) {
        debug!(
            command = self.root.name(),
            subcommand = subcommand.map(SubCommand::name),
            sender = sender.name(),
            error = %err,
            "argument binding failed"
        );

        sender.send_message(&self.messages.error(err.to_string()));
        if err.wants_usage() {
            sender.send_message(&self.usage_line(subcommand));
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("root", &self.root)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

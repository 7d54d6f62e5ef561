//! Line-oriented command host.
//!
//! The host owns one [`Dispatcher`] per root command and routes each input
//! line to the dispatcher whose root answers to the first word.

use commandox_core::{CommandSender, Dispatcher, MessageConfig, Outcome, split_words};
use tracing::{debug, warn};

pub struct Host {
    dispatchers: Vec<Dispatcher>,
    messages: MessageConfig,
}

impl Host {
    pub fn new(messages: MessageConfig) -> Self {
        Self {
            dispatchers: Vec::new(),
            messages,
        }
    }

    /// Register a root command. When two roots share a label the one
    /// registered first keeps it.
    pub fn register(&mut self, dispatcher: Dispatcher) {
        let root = dispatcher.root();
        let labels = std::iter::once(root.name()).chain(root.aliases().iter().map(String::as_str));
        for label in labels {
            if let Some(existing) = self.find(label) {
                warn!(
                    label,
                    command = root.name(),
                    existing = existing.root().name(),
                    "label already registered"
                );
            }
        }
        self.dispatchers.push(dispatcher);
    }

    pub fn with_dispatchers(mut self, dispatchers: impl IntoIterator<Item = Dispatcher>) -> Self {
        for dispatcher in dispatchers {
            self.register(dispatcher);
        }
        self
    }

    /// Dispatcher whose root name or alias is `label`.
    pub fn find(&self, label: &str) -> Option<&Dispatcher> {
        self.dispatchers.iter().find(|d| d.root().answers_to(label))
    }

    /// Root command names, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.dispatchers.iter().map(|d| d.root().name())
    }

    /// Run one input line. Blank lines are ignored and return `None`, as do
    /// unknown commands after telling the sender.
    pub fn handle_line(&self, sender: &dyn CommandSender, line: &str) -> Option<Outcome> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let words = split_words(line);
        let (&label, rest) = words.split_first()?;

        let Some(dispatcher) = self.find(label) else {
            debug!(label, sender = sender.name(), "unknown command");
            sender.send_message(&self.messages.error(format!("Unknown command '{label}'.")));
            return None;
        };

        Some(dispatcher.execute(sender, label, rest))
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("commands", &self.commands().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::console::ConsoleSender;
    use commandox_core::RootCommand;

    fn echo(name: &str) -> Dispatcher {
        let root = RootCommand::builder(name)
            .alias(format!("{name}2"))
            .on_run(|ctx| {
                ctx.reply(format!("{} via {}", ctx.root().name(), ctx.label()));
                Ok(())
            })
            .build()
            .unwrap();
        Dispatcher::new(root)
    }

    fn output(sender: ConsoleSender<Vec<u8>>) -> String {
        String::from_utf8(sender.into_inner()).unwrap()
    }

    #[test]
    fn test_routes_by_name_and_alias() {
        let host = Host::new(MessageConfig::plain()).with_dispatchers([echo("ping"), echo("pong")]);
        let sender = ConsoleSender::new(&ConsoleConfig::default(), Vec::new());

        assert_eq!(host.handle_line(&sender, "/ping"), Some(Outcome::Executed));
        assert_eq!(host.handle_line(&sender, "PONG2"), Some(Outcome::Executed));
        assert_eq!(output(sender), "ping via ping\npong via PONG2\n");
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        let host = Host::new(MessageConfig::plain()).with_dispatchers([echo("ping")]);
        let sender = ConsoleSender::new(&ConsoleConfig::default(), Vec::new());

        assert_eq!(host.handle_line(&sender, "   "), None);
        assert_eq!(host.handle_line(&sender, "/"), None);
        assert_eq!(host.handle_line(&sender, "nope 1 2"), None);
        assert_eq!(output(sender), "Unknown command 'nope'.\n");
    }

    #[test]
    fn test_first_registration_keeps_label() {
        let mut host = Host::new(MessageConfig::plain());
        host.register(echo("ping"));
        host.register(echo("ping"));
        assert_eq!(host.commands().count(), 2);

        let sender = ConsoleSender::new(&ConsoleConfig::default(), Vec::new());
        host.handle_line(&sender, "ping");
        assert_eq!(output(sender), "ping via ping\n");
    }
}

//! Console sender.

use std::cell::RefCell;
use std::io::Write;

use commandox_core::CommandSender;

use crate::config::{ConsoleConfig, WILDCARD_PERMISSION};

/// Marker that starts a two-character colour code such as `§c`.
const COLOUR_MARKER: char = '§';

/// Remove `§x` colour codes from a message.
pub fn strip_codes(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars();
    while let Some(c) = chars.next() {
        if c == COLOUR_MARKER {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// Sender that writes every message as a line to `W`.
pub struct ConsoleSender<W: Write> {
    name: String,
    permissions: Vec<String>,
    raw_codes: bool,
    out: RefCell<W>,
}

impl<W: Write> ConsoleSender<W> {
    pub fn new(config: &ConsoleConfig, out: W) -> Self {
        Self {
            name: config.name.clone(),
            permissions: config.permissions.clone(),
            raw_codes: false,
            out: RefCell::new(out),
        }
    }

    /// Keep colour codes in output.
    pub fn with_raw_codes(mut self, raw_codes: bool) -> Self {
        self.raw_codes = raw_codes;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> CommandSender for ConsoleSender<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == WILDCARD_PERMISSION || p == permission)
    }

    fn send_message(&self, message: &str) {
        let line = if self.raw_codes {
            message.to_string()
        } else {
            strip_codes(message)
        };
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(sender = %self.name, error = %e, "failed to write console output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(permissions: &[&str]) -> ConsoleConfig {
        ConsoleConfig {
            name: "Ops".to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_strip_codes() {
        assert_eq!(strip_codes("§eCorrect usage: §f/team"), "Correct usage: /team");
        assert_eq!(strip_codes("plain"), "plain");
        assert_eq!(strip_codes("trailing§"), "trailing");
    }

    #[test]
    fn test_messages_are_lines() {
        let sender = ConsoleSender::new(&config(&[]), Vec::new());
        sender.send_message("§cToo many arguments.");
        sender.send_message("ok");
        let out = String::from_utf8(sender.into_inner()).unwrap();
        assert_eq!(out, "Too many arguments.\nok\n");
    }

    #[test]
    fn test_raw_codes_kept() {
        let sender = ConsoleSender::new(&config(&[]), Vec::new()).with_raw_codes(true);
        sender.send_message("§cNo.");
        assert_eq!(String::from_utf8(sender.into_inner()).unwrap(), "§cNo.\n");
    }

    #[test]
    fn test_permissions() {
        let limited = ConsoleSender::new(&config(&["team.use"]), Vec::new());
        assert!(limited.has_permission("team.use"));
        assert!(!limited.has_permission("team.manage"));

        let all = ConsoleSender::new(&config(&["*"]), Vec::new());
        assert!(all.has_permission("team.manage"));
        assert_eq!(all.name(), "Ops");
    }
}

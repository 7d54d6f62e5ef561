//! Host-facing collaborator traits.
//!
//! The host supplies a [`CommandSender`] for each invocation and, when entity
//! arguments are used, an [`EntityRegistry`] describing who is currently
//! addressable. [`OnlineEntities`] is an in-memory registry hosts can share
//! and update from other threads.

use std::sync::Arc;

use parking_lot::RwLock;

/// Whoever issued a command: a player, the console, a remote client.
pub trait CommandSender {
    /// Display name of the sender, used in log fields.
    fn name(&self) -> &str;

    /// Whether the sender holds the given permission tag.
    fn has_permission(&self, permission: &str) -> bool;

    /// Deliver a line of text to the sender.
    fn send_message(&self, message: &str);
}

impl<S: CommandSender + ?Sized> CommandSender for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn has_permission(&self, permission: &str) -> bool {
        (**self).has_permission(permission)
    }

    fn send_message(&self, message: &str) {
        (**self).send_message(message)
    }
}

/// Source of currently addressable entity names.
///
/// Lookups read a snapshot; a registry mutated concurrently may return a
/// slightly stale list.
pub trait EntityRegistry: Send + Sync {
    /// Names of every entity that can be referenced right now.
    fn online_names(&self) -> Vec<String>;
}

/// Registry with nobody online.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntities;

impl EntityRegistry for NoEntities {
    fn online_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Shared, mutable in-memory registry.
///
/// Cloning yields another handle to the same name list.
#[derive(Debug, Clone, Default)]
pub struct OnlineEntities {
    names: Arc<RwLock<Vec<String>>>,
}

impl OnlineEntities {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given names online.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = Self::new();
        for name in names {
            registry.join(name);
        }
        registry
    }

    /// Mark an entity as online. Names already present are ignored.
    pub fn join(&self, name: impl Into<String>) {
        let name = name.into();
        let mut names = self.names.write();
        if !names.iter().any(|n| n == &name) {
            names.push(name);
        }
    }

    /// Mark an entity as offline. Returns whether it was online.
    pub fn leave(&self, name: &str) -> bool {
        let mut names = self.names.write();
        let before = names.len();
        names.retain(|n| n != name);
        names.len() != before
    }

    /// Number of online entities.
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    /// Whether nobody is online.
    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}

impl EntityRegistry for OnlineEntities {
    fn online_names(&self) -> Vec<String> {
        self.names.read().clone()
    }
}

impl<R: EntityRegistry + ?Sized> EntityRegistry for Arc<R> {
    fn online_names(&self) -> Vec<String> {
        (**self).online_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_leave() {
        let online = OnlineEntities::new();
        online.join("Steve");
        online.join("Alex");
        online.join("Steve");
        assert_eq!(online.len(), 2);

        assert!(online.leave("Steve"));
        assert!(!online.leave("Steve"));
        assert_eq!(online.online_names(), vec!["Alex".to_string()]);
    }

    #[test]
    fn test_clones_share_names() {
        let online = OnlineEntities::with_names(["Alex"]);
        let handle = online.clone();
        handle.join("Notch");
        assert_eq!(online.len(), 2);
    }

    #[test]
    fn test_no_entities() {
        assert!(NoEntities.online_names().is_empty());
    }
}

//! Result of a successful binding.

use indexmap::IndexMap;

use crate::argument::ArgValue;

/// Argument values keyed by argument name, in binding order.
///
/// Optional arguments that were not reached are absent, not null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: IndexMap<String, ArgValue>,
}

impl ParsedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Whether a value was bound for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ArgValue::as_bool)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgValue::as_int)
    }

    /// Text of a string, raw-text, enum or entity argument.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_str)
    }

    pub fn entity(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_entity)
    }

    /// Value for `name`, or `default` when it was not bound.
    pub fn get_or(&self, name: &str, default: ArgValue) -> ArgValue {
        self.get(name).cloned().unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

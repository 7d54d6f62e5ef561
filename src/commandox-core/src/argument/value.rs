//! Values produced by argument parsing.

use std::fmt;

/// A converted argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Result of a boolean argument.
    Bool(bool),
    /// Result of an integer argument.
    Int(i64),
    /// Result of string, raw-text and enum arguments.
    Text(String),
    /// Canonical name of the entity an entity argument matched.
    Entity(String),
    /// An optional enum or entity argument was given an empty word.
    Null,
}

impl ArgValue {
    /// Returns the boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text of a text or entity value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Entity(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the entity name, if this is an entity value.
    pub fn as_entity(&self) -> Option<&str> {
        match self {
            Self::Entity(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Entity(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(ArgValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ArgValue::Int(7).as_int(), Some(7));
        assert_eq!(ArgValue::Int(7).as_bool(), None);
        assert_eq!(ArgValue::from("red").as_str(), Some("red"));
        assert_eq!(ArgValue::Entity("Steve".into()).as_str(), Some("Steve"));
        assert_eq!(ArgValue::Text("Steve".into()).as_entity(), None);
        assert!(ArgValue::Null.is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(ArgValue::Bool(false).to_string(), "false");
        assert_eq!(ArgValue::Int(-3).to_string(), "-3");
        assert_eq!(ArgValue::Null.to_string(), "null");
    }
}

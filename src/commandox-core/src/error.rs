//! Error types for argument binding and command definition.

use thiserror::Error;

/// Errors raised while binding words to an argument list.
///
/// Every variant is recoverable: the dispatcher turns it into text for the
/// sender and the invocation still counts as handled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required argument had no word left to consume.
    #[error("Missing required argument: {argument}")]
    Missing { argument: String },

    /// A word was present but rejected by the argument's type.
    #[error("{message}")]
    InvalidValue { argument: String, message: String },

    /// Words remained after every argument was bound.
    #[error("Too many arguments.")]
    TooManyArguments,
}

impl ArgumentError {
    /// Create an invalid-value error for the named argument.
    pub fn invalid(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Name of the argument the error is about, if it is argument-specific.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::Missing { argument } | Self::InvalidValue { argument, .. } => Some(argument),
            Self::TooManyArguments => None,
        }
    }

    /// Whether the sender should also be shown the usage line.
    pub fn wants_usage(&self) -> bool {
        self.argument().is_some()
    }
}

/// Errors raised while building argument lists and command definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A command, subcommand, alias or argument name was empty.
    #[error("Name must not be empty")]
    EmptyName,

    /// An alias spans more words than the resolver can match.
    #[error("Invalid alias '{0}': aliases are one or two words")]
    InvalidAlias(String),

    /// A command or subcommand was built without a handler.
    #[error("Command '{0}' has no handler")]
    MissingHandler(String),

    /// Two arguments in one list share a name.
    #[error("Duplicate argument name: {0}")]
    DuplicateArgument(String),

    /// Two arguments were registered at the same position.
    #[error("Duplicate argument position: {0}")]
    DuplicatePosition(usize),

    /// Positions were not contiguous from zero.
    #[error("Missing argument at position {0}")]
    PositionGap(usize),

    /// A required argument was declared after an optional one.
    #[error("Required argument '{required}' follows optional argument '{optional}'")]
    RequiredAfterOptional { required: String, optional: String },

    /// An argument was declared after a raw-text argument.
    #[error("Argument '{argument}' follows raw text argument '{raw}'")]
    ArgumentAfterRawText { argument: String, raw: String },

    /// An enum argument has no allowed values.
    #[error("Enum argument '{0}' has no allowed values")]
    EmptyEnum(String),

    /// An integer argument's minimum is above its maximum.
    #[error("Integer argument '{0}' has min greater than max")]
    InvalidRange(String),

    /// An alias index key is claimed by two different subcommands.
    #[error("Alias '{alias}' of subcommand '{conflicting}' is already used by '{existing}'")]
    AliasConflict {
        alias: String,
        existing: String,
        conflicting: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = ArgumentError::Missing {
            argument: "target".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required argument: target");
        assert_eq!(err.argument(), Some("target"));
        assert!(err.wants_usage());
    }

    #[test]
    fn test_invalid_value_displays_message_only() {
        let err = ArgumentError::invalid("amount", "Argument 'amount' must be a number.");
        assert_eq!(err.to_string(), "Argument 'amount' must be a number.");
        assert!(err.wants_usage());
    }

    #[test]
    fn test_too_many_arguments_has_no_usage() {
        let err = ArgumentError::TooManyArguments;
        assert_eq!(err.to_string(), "Too many arguments.");
        assert_eq!(err.argument(), None);
        assert!(!err.wants_usage());
    }
}

//! Ordered, validated argument lists.

use std::collections::HashSet;

use super::{Argument, ArgumentKind};
use crate::error::DefinitionError;

/// An immutable, gap-free sequence of arguments.
///
/// Construction guarantees:
/// - names are non-empty and unique;
/// - no required argument follows an optional one;
/// - a raw-text argument, if present, is last;
/// - enum arguments have values and integer bounds are ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    arguments: Vec<Argument>,
}

impl ArgumentList {
    /// A list with no arguments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a list from arguments in positional order.
    pub fn new(arguments: impl IntoIterator<Item = Argument>) -> Result<Self, DefinitionError> {
        let arguments: Vec<Argument> = arguments.into_iter().collect();
        validate(&arguments)?;
        Ok(Self { arguments })
    }

    pub fn builder() -> ArgumentListBuilder {
        ArgumentListBuilder::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Argument at the given position.
    pub fn at(&self, position: usize) -> Option<&Argument> {
        self.arguments.get(position)
    }

    /// Argument with the given name.
    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    /// Usage fragments of every argument, space-joined.
    pub fn usage(&self) -> String {
        self.arguments
            .iter()
            .map(Argument::usage)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}

/// Builder accepting arguments in order or at explicit positions.
///
/// ```rust,ignore
/// let list = ArgumentList::builder()
///     .at(1, Argument::integer("amount").optional())
///     .at(0, Argument::entity("target"))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ArgumentListBuilder {
    entries: Vec<(usize, Argument)>,
}

impl ArgumentListBuilder {
    /// Append an argument after the highest position registered so far.
    pub fn argument(mut self, argument: Argument) -> Self {
        let position = self
            .entries
            .iter()
            .map(|(position, _)| position + 1)
            .max()
            .unwrap_or(0);
        self.entries.push((position, argument));
        self
    }

    /// Register an argument at an explicit position.
    pub fn at(mut self, position: usize, argument: Argument) -> Self {
        self.entries.push((position, argument));
        self
    }

    pub fn build(mut self) -> Result<ArgumentList, DefinitionError> {
        self.entries.sort_by_key(|(position, _)| *position);

        for (expected, (position, _)) in self.entries.iter().enumerate() {
            if *position < expected {
                return Err(DefinitionError::DuplicatePosition(*position));
            }
            if *position > expected {
                return Err(DefinitionError::PositionGap(expected));
            }
        }

        ArgumentList::new(self.entries.into_iter().map(|(_, argument)| argument))
    }
}

fn validate(arguments: &[Argument]) -> Result<(), DefinitionError> {
    let mut names = HashSet::new();
    let mut first_optional: Option<&Argument> = None;
    let mut raw_text: Option<&Argument> = None;

    for argument in arguments {
        if argument.name().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if !names.insert(argument.name()) {
            return Err(DefinitionError::DuplicateArgument(argument.name().to_string()));
        }
        if let Some(raw) = raw_text {
            return Err(DefinitionError::ArgumentAfterRawText {
                argument: argument.name().to_string(),
                raw: raw.name().to_string(),
            });
        }

        match argument.kind() {
            ArgumentKind::Enum { values } if values.is_empty() => {
                return Err(DefinitionError::EmptyEnum(argument.name().to_string()));
            }
            ArgumentKind::Integer {
                min: Some(min),
                max: Some(max),
            } if min > max => {
                return Err(DefinitionError::InvalidRange(argument.name().to_string()));
            }
            ArgumentKind::RawText => raw_text = Some(argument),
            _ => {}
        }

        match first_optional {
            Some(optional) if !argument.is_optional() => {
                return Err(DefinitionError::RequiredAfterOptional {
                    required: argument.name().to_string(),
                    optional: optional.name().to_string(),
                });
            }
            None if argument.is_optional() => first_optional = Some(argument),
            _ => {}
        }
    }

    Ok(())
}

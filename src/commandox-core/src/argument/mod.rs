//! Typed positional arguments.
//!
//! An [`Argument`] validates and converts the word(s) at one position of a
//! command line. The set of argument types is closed and described by
//! [`ArgumentKind`]:
//!
//! | Kind       | Consumes        | Produces             |
//! |------------|-----------------|----------------------|
//! | `Boolean`  | one word        | [`ArgValue::Bool`]   |
//! | `Integer`  | one word        | [`ArgValue::Int`]    |
//! | `Enum`     | one word        | [`ArgValue::Text`]   |
//! | `String`   | one word        | [`ArgValue::Text`]   |
//! | `RawText`  | remaining words | [`ArgValue::Text`]   |
//! | `Entity`   | one word        | [`ArgValue::Entity`] |

mod list;
mod value;

pub use list::{ArgumentList, ArgumentListBuilder};
pub use value::ArgValue;

use crate::error::ArgumentError;
use crate::sender::{CommandSender, EntityRegistry};

const TRUE_WORDS: &[&str] = &["true", "1", "yes", "y", "on"];
const FALSE_WORDS: &[&str] = &["false", "0", "no", "n", "off"];

/// The type of an argument together with its constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKind {
    Boolean,
    /// Integer with optional inclusive bounds. Input beyond the `i64` range
    /// saturates at `i64::MIN` / `i64::MAX` before the bounds are checked.
    Integer { min: Option<i64>, max: Option<i64> },
    /// One of a fixed set of lowercase values.
    Enum { values: Vec<String> },
    String,
    /// Every remaining word, joined by single spaces.
    RawText,
    /// Prefix match against the online entity registry.
    Entity,
}

impl ArgumentKind {
    /// Stable type tag, e.g. `int` or `enum(red|blue)`.
    pub fn type_name(&self) -> String {
        match self {
            Self::Boolean => "bool".to_string(),
            Self::Integer { .. } => "int".to_string(),
            Self::Enum { values } => format!("enum({})", values.join("|")),
            Self::String => "string".to_string(),
            Self::RawText => "rawtext".to_string(),
            Self::Entity => "player".to_string(),
        }
    }
}

/// What an argument may consult while parsing.
#[derive(Clone, Copy)]
pub struct ParseScope<'a> {
    /// The sender whose command line is being parsed.
    pub sender: &'a dyn CommandSender,
    /// Registry used by entity arguments.
    pub entities: &'a dyn EntityRegistry,
}

impl<'a> ParseScope<'a> {
    pub fn new(sender: &'a dyn CommandSender, entities: &'a dyn EntityRegistry) -> Self {
        Self { sender, entities }
    }
}

/// A named, typed positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    optional: bool,
    kind: ArgumentKind,
}

impl Argument {
    /// Create a required argument of the given kind.
    pub fn new(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            optional: false,
            kind,
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Boolean)
    }

    /// Unbounded integer.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Integer { min: None, max: None })
    }

    /// Integer within `min..=max`.
    pub fn integer_between(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self::new(
            name,
            ArgumentKind::Integer {
                min: Some(min),
                max: Some(max),
            },
        )
    }

    /// Integer with optional bounds on either side.
    pub fn integer_bounded(name: impl Into<String>, min: Option<i64>, max: Option<i64>) -> Self {
        Self::new(name, ArgumentKind::Integer { min, max })
    }

    /// Enum over the given values. Values are matched case-insensitively.
    pub fn one_of<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .collect();
        Self::new(name, ArgumentKind::Enum { values })
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::String)
    }

    pub fn raw_text(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::RawText)
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Entity)
    }

    /// Mark the argument optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn kind(&self) -> &ArgumentKind {
        &self.kind
    }

    pub fn type_name(&self) -> String {
        self.kind.type_name()
    }

    /// Usage fragment: `<name:type>` when required, `[name:type]` when optional.
    pub fn usage(&self) -> String {
        let syntax = match &self.kind {
            ArgumentKind::Enum { values } => format!("{}:{}", self.name, values.join("|")),
            ArgumentKind::RawText => format!("{}...:raw", self.name),
            kind => format!("{}:{}", self.name, kind.type_name()),
        };
        if self.optional {
            format!("[{syntax}]")
        } else {
            format!("<{syntax}>")
        }
    }

    /// Completion candidates for this argument.
    pub fn suggestions(&self, entities: &dyn EntityRegistry) -> Vec<String> {
        match &self.kind {
            ArgumentKind::Boolean => vec!["true".to_string(), "false".to_string()],
            ArgumentKind::Enum { values } => values.clone(),
            ArgumentKind::Entity => entities.online_names(),
            ArgumentKind::Integer { .. } | ArgumentKind::String | ArgumentKind::RawText => {
                Vec::new()
            }
        }
    }

    /// Parse the word(s) at `cursor`, advancing it past what was consumed.
    pub fn parse(
        &self,
        words: &[&str],
        cursor: &mut usize,
        scope: &ParseScope<'_>,
    ) -> Result<ArgValue, ArgumentError> {
        match &self.kind {
            ArgumentKind::Boolean => self.parse_boolean(take_word(words, cursor)),
            ArgumentKind::Integer { min, max } => {
                self.parse_integer(take_word(words, cursor), *min, *max)
            }
            ArgumentKind::Enum { values } => self.parse_enum(take_word(words, cursor), values),
            ArgumentKind::String => self.parse_string(take_word(words, cursor)),
            ArgumentKind::RawText => self.parse_raw_text(words, cursor),
            ArgumentKind::Entity => self.parse_entity(take_word(words, cursor), scope.entities),
        }
    }

    fn parse_boolean(&self, raw: &str) -> Result<ArgValue, ArgumentError> {
        let word = raw.trim().to_lowercase();
        if word.is_empty() && self.optional {
            return Ok(ArgValue::Bool(false));
        }
        if TRUE_WORDS.contains(&word.as_str()) {
            return Ok(ArgValue::Bool(true));
        }
        if FALSE_WORDS.contains(&word.as_str()) {
            return Ok(ArgValue::Bool(false));
        }
        Err(ArgumentError::invalid(
            &self.name,
            format!("Argument '{}' must be true/false (or similar).", self.name),
        ))
    }

    fn parse_integer(
        &self,
        raw: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<ArgValue, ArgumentError> {
        let value = parse_number(raw).ok_or_else(|| {
            ArgumentError::invalid(
                &self.name,
                format!("Argument '{}' must be a number.", self.name),
            )
        })?;

        if let Some(min) = min.filter(|min| value < *min) {
            return Err(ArgumentError::invalid(
                &self.name,
                format!("Minimum value for '{}' is {min}.", self.name),
            ));
        }
        if let Some(max) = max.filter(|max| value > *max) {
            return Err(ArgumentError::invalid(
                &self.name,
                format!("Maximum value for '{}' is {max}.", self.name),
            ));
        }
        Ok(ArgValue::Int(value))
    }

    fn parse_enum(&self, raw: &str, values: &[String]) -> Result<ArgValue, ArgumentError> {
        let word = raw.trim().to_lowercase();
        if word.is_empty() && self.optional {
            return Ok(ArgValue::Null);
        }
        if !values.contains(&word) {
            return Err(ArgumentError::invalid(
                &self.name,
                format!(
                    "Invalid value for '{}'. Allowed: {}",
                    self.name,
                    values.join(", ")
                ),
            ));
        }
        Ok(ArgValue::Text(word))
    }

    fn parse_string(&self, raw: &str) -> Result<ArgValue, ArgumentError> {
        if raw.is_empty() && !self.optional {
            return Err(ArgumentError::invalid(
                &self.name,
                format!("Invalid value for '{}'.", self.name),
            ));
        }
        Ok(ArgValue::Text(raw.to_string()))
    }

    fn parse_raw_text(&self, words: &[&str], cursor: &mut usize) -> Result<ArgValue, ArgumentError> {
        if *cursor >= words.len() {
            if self.optional {
                return Ok(ArgValue::Text(String::new()));
            }
            return Err(ArgumentError::invalid(
                &self.name,
                format!("Missing argument '{}'.", self.name),
            ));
        }

        let text = words[*cursor..].join(" ");
        *cursor = words.len();
        Ok(ArgValue::Text(text))
    }

    fn parse_entity(
        &self,
        raw: &str,
        entities: &dyn EntityRegistry,
    ) -> Result<ArgValue, ArgumentError> {
        if raw.is_empty() && self.optional {
            return Ok(ArgValue::Null);
        }

        find_by_prefix(raw, &entities.online_names())
            .map(ArgValue::Entity)
            .ok_or_else(|| {
                ArgumentError::invalid(&self.name, format!("Player '{raw}' not found."))
            })
    }
}

/// Single-word arguments always advance the cursor, even past the end.
fn take_word<'w>(words: &[&'w str], cursor: &mut usize) -> &'w str {
    let word = words.get(*cursor).copied().unwrap_or("");
    *cursor += 1;
    word
}

/// Accepts integers and finite decimals; decimals are truncated toward zero.
/// Out-of-range values saturate (`as` casts from `f64` clamp).
fn parse_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
}

/// Case-insensitive prefix search. The shortest matching name wins; among
/// names of equal length the first one seen wins.
fn find_by_prefix(prefix: &str, names: &[String]) -> Option<String> {
    let prefix = prefix.to_lowercase();
    let mut best: Option<&String> = None;

    for name in names {
        if !name.to_lowercase().starts_with(&prefix) {
            continue;
        }
        if best.is_none_or(|found| name.len() < found.len()) {
            best = Some(name);
        }
    }

    best.cloned()
}

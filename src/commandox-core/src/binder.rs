//! Positional argument binding.

use tracing::trace;

use crate::argument::{ArgumentList, ParseScope};
use crate::error::ArgumentError;
use crate::parsed::ParsedArguments;

/// Bind `words` against `arguments`.
///
/// Arguments are visited in position order. When the words run out, an
/// optional argument ends binding (everything after it stays unbound) and a
/// required one fails with [`ArgumentError::Missing`]. Words left over once
/// every argument is bound fail with [`ArgumentError::TooManyArguments`].
/// The first failure aborts binding; no partial result is returned.
pub fn bind(
    arguments: &ArgumentList,
    words: &[&str],
    scope: &ParseScope<'_>,
) -> Result<ParsedArguments, ArgumentError> {
    let mut parsed = ParsedArguments::new();
    let mut cursor = 0;

    for argument in arguments {
        if cursor >= words.len() {
            if argument.is_optional() {
                break;
            }
            return Err(ArgumentError::Missing {
                argument: argument.name().to_string(),
            });
        }

        let value = argument.parse(words, &mut cursor, scope)?;
        trace!(argument = argument.name(), %value, "bound argument");
        parsed.insert(argument.name(), value);
    }

    if cursor < words.len() {
        return Err(ArgumentError::TooManyArguments);
    }

    Ok(parsed)
}

//! Case-insensitive index from subcommand names and aliases to subcommands.

use std::collections::HashMap;

use crate::definition::SubCommand;
use crate::error::DefinitionError;

/// Immutable lookup table built once from a root command's subcommands.
///
/// Keys are lowercase names and aliases of one or two words; values are
/// positions in the root command's subcommand list, so every key of a
/// subcommand designates the same instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasIndex {
    keys: HashMap<String, usize>,
}

impl AliasIndex {
    /// Build the index, rejecting keys claimed by two different subcommands.
    pub fn build(subcommands: &[SubCommand]) -> Result<Self, DefinitionError> {
        let mut keys: HashMap<String, usize> = HashMap::new();

        for (slot, sub) in subcommands.iter().enumerate() {
            let names = std::iter::once(sub.name()).chain(sub.aliases().iter().map(String::as_str));
            for name in names {
                let key = normalize_alias(name)?;
                match keys.get(&key) {
                    Some(&existing) if existing != slot => {
                        return Err(DefinitionError::AliasConflict {
                            alias: key,
                            existing: subcommands[existing].name().to_string(),
                            conflicting: sub.name().to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        keys.insert(key, slot);
                    }
                }
            }
        }

        Ok(Self { keys })
    }

    /// Look up a name or alias; the key is lowercased first.
    pub fn lookup(&self, key: &str) -> Option<usize> {
        self.keys.get(&key.to_lowercase()).copied()
    }

    /// Every registered key, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.keys.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Lowercase an alias and collapse its whitespace; aliases are one or two words.
pub(crate) fn normalize_alias(alias: &str) -> Result<String, DefinitionError> {
    let words: Vec<&str> = alias.split_whitespace().collect();
    match words.len() {
        0 => Err(DefinitionError::EmptyName),
        1 | 2 => Ok(words.join(" ").to_lowercase()),
        _ => Err(DefinitionError::InvalidAlias(alias.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(name: &str, aliases: &[&str]) -> SubCommand {
        SubCommand::builder(name)
            .aliases(aliases.iter().copied())
            .on_run(|_ctx| Ok(()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_names_and_aliases_map_to_same_slot() {
        let subs = vec![sub("Set", &["s", "Put Value"]), sub("info", &[])];
        let index = AliasIndex::build(&subs).unwrap();

        assert_eq!(index.lookup("set"), Some(0));
        assert_eq!(index.lookup("SET"), Some(0));
        assert_eq!(index.lookup("s"), Some(0));
        assert_eq!(index.lookup("put value"), Some(0));
        assert_eq!(index.lookup("info"), Some(1));
        assert_eq!(index.lookup("missing"), None);
        assert_eq!(index.keys(), vec!["info", "put value", "s", "set"]);
    }

    #[test]
    fn test_conflicting_alias_rejected() {
        let subs = vec![sub("add", &[]), sub("insert", &["ADD"])];
        assert_eq!(
            AliasIndex::build(&subs),
            Err(DefinitionError::AliasConflict {
                alias: "add".to_string(),
                existing: "add".to_string(),
                conflicting: "insert".to_string(),
            })
        );
    }

    #[test]
    fn test_alias_repeating_own_name_is_fine() {
        let subs = vec![sub("add", &["Add"])];
        let index = AliasIndex::build(&subs).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_normalize_alias() {
        assert_eq!(normalize_alias("  Group   ADD "), Ok("group add".to_string()));
        assert_eq!(normalize_alias(" "), Err(DefinitionError::EmptyName));
        assert_eq!(
            normalize_alias("a b c"),
            Err(DefinitionError::InvalidAlias("a b c".to_string()))
        );
    }
}

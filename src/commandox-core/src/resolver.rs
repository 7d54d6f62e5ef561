//! Subcommand resolution.

use tracing::trace;

use crate::alias::AliasIndex;

/// A subcommand addressed by the leading words of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCommandMatch {
    /// Position of the subcommand in its root command.
    pub slot: usize,
    /// Number of leading words naming the subcommand (1 or 2).
    pub consumed: usize,
}

/// Find the subcommand addressed by `words`, if any.
///
/// The first word alone is tried before the first two words joined by a
/// space, and there is no backtracking: a one-word alias always shadows a
/// two-word alias starting with the same word.
pub fn resolve(index: &AliasIndex, words: &[&str]) -> Option<SubCommandMatch> {
    let first = words.first()?;

    if let Some(slot) = index.lookup(first) {
        trace!(alias = %first, slot, "resolved one-word subcommand");
        return Some(SubCommandMatch { slot, consumed: 1 });
    }

    let second = words.get(1)?;
    let phrase = format!("{first} {second}");
    let slot = index.lookup(&phrase)?;
    trace!(alias = %phrase, slot, "resolved two-word subcommand");
    Some(SubCommandMatch { slot, consumed: 2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SubCommand;

    fn sub(name: &str, aliases: &[&str]) -> SubCommand {
        SubCommand::builder(name)
            .aliases(aliases.iter().copied())
            .on_run(|_ctx| Ok(()))
            .build()
            .unwrap()
    }

    fn index(subs: Vec<SubCommand>) -> AliasIndex {
        AliasIndex::build(&subs).unwrap()
    }

    #[test]
    fn test_no_words() {
        assert_eq!(resolve(&index(vec![sub("set", &[])]), &[]), None);
    }

    #[test]
    fn test_single_word_case_insensitive() {
        let idx = index(vec![sub("set", &[]), sub("info", &["i"])]);
        assert_eq!(
            resolve(&idx, &["SET", "x"]),
            Some(SubCommandMatch { slot: 0, consumed: 1 })
        );
        assert_eq!(
            resolve(&idx, &["I"]),
            Some(SubCommandMatch { slot: 1, consumed: 1 })
        );
    }

    #[test]
    fn test_two_word_alias() {
        let idx = index(vec![sub("groupadd", &["group add"])]);
        assert_eq!(
            resolve(&idx, &["group", "ADD", "bob"]),
            Some(SubCommandMatch { slot: 0, consumed: 2 })
        );
        assert_eq!(resolve(&idx, &["group"]), None);
    }

    #[test]
    fn test_single_word_shadows_two_word() {
        let idx = index(vec![sub("set", &[]), sub("setlimit", &["set limit"])]);
        assert_eq!(
            resolve(&idx, &["set", "limit"]),
            Some(SubCommandMatch { slot: 0, consumed: 1 })
        );
        assert_eq!(
            resolve(&idx, &["set", "player1"]),
            Some(SubCommandMatch { slot: 0, consumed: 1 })
        );
    }

    #[test]
    fn test_unknown_words_fall_through() {
        let idx = index(vec![sub("set", &[])]);
        assert_eq!(resolve(&idx, &["hello", "world"]), None);
    }
}

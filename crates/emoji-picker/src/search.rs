//! Search filtering and result ordering.

use std::cmp::Ordering;
use std::collections::HashSet;

use emoji_core::{Emoji, EmojiId, EmojiTable};

/// Ranks two matching emojis for a search filter.
pub trait EmojiComparator {
    fn compare(&self, a: &Emoji, b: &Emoji, filter: &str) -> Ordering;
}

impl<F> EmojiComparator for F
where
    F: Fn(&Emoji, &Emoji, &str) -> Ordering,
{
    fn compare(&self, a: &Emoji, b: &Emoji, filter: &str) -> Ordering {
        self(a, b, filter)
    }
}

/// Default ranking: emojis whose primary alias starts with the filter come
/// first, then everything by primary alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceComparator;

impl EmojiComparator for RelevanceComparator {
    fn compare(&self, a: &Emoji, b: &Emoji, filter: &str) -> Ordering {
        let a_name = a.name().to_lowercase();
        let b_name = b.name().to_lowercase();

        match (a_name.starts_with(filter), b_name.starts_with(filter)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a_name.cmp(&b_name),
        }
    }
}

/// Emojis with an alias containing `filter`, recently used ones first.
///
/// Matching ignores case and scans the whole table on every call. An emoji
/// counts as recently used when its id or any of its aliases appears in
/// `recent`. Each group is sorted with `comparator`; a recent match always
/// precedes a non-recent one whatever their relevance.
pub fn filter_and_sort<C>(
    emojis: &EmojiTable,
    filter: &str,
    recent: &[EmojiId],
    comparator: &C,
) -> Vec<Emoji>
where
    C: EmojiComparator + ?Sized,
{
    let filter = filter.to_lowercase();
    let recent: HashSet<String> = recent.iter().map(|id| id.0.to_lowercase()).collect();

    let (mut recent_matches, mut other_matches): (Vec<Emoji>, Vec<Emoji>) = emojis
        .values()
        .filter(|emoji| emoji.alias_contains(&filter))
        .cloned()
        .partition(|emoji| is_recent(emoji, &recent));

    recent_matches.sort_by(|a, b| comparator.compare(a, b, &filter));
    other_matches.sort_by(|a, b| comparator.compare(a, b, &filter));

    recent_matches.extend(other_matches);
    recent_matches
}

fn is_recent(emoji: &Emoji, recent: &HashSet<String>) -> bool {
    recent.contains(emoji.id().0.as_str())
        || emoji
            .aliases()
            .iter()
            .any(|alias| recent.contains(&alias.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EmojiTable {
        EmojiTable::from_emojis(vec![
            Emoji::system("1F600", &["grinning"]),
            Emoji::system("1F601", &["grin"]),
            Emoji::system("1F63A", &["smiley_cat"]),
            Emoji::system("1F604", &["smile", "happy"]),
            Emoji::system("1F622", &["cry"]),
            Emoji::custom("c1", "Smiling_Parrot"),
        ])
        .unwrap()
    }

    fn names(emojis: &[Emoji]) -> Vec<&str> {
        emojis.iter().map(Emoji::name).collect()
    }

    #[test]
    fn test_matches_any_alias_case_insensitive() {
        let results = filter_and_sort(&table(), "HAP", &[], &RelevanceComparator);
        assert_eq!(names(&results), ["smile"]);

        let results = filter_and_sort(&table(), "parrot", &[], &RelevanceComparator);
        assert_eq!(names(&results), ["Smiling_Parrot"]);

        assert!(filter_and_sort(&table(), "zzz", &[], &RelevanceComparator).is_empty());
    }

    #[test]
    fn test_prefix_matches_rank_first() {
        let results = filter_and_sort(&table(), "smil", &[], &RelevanceComparator);
        assert_eq!(names(&results), ["smile", "smiley_cat", "Smiling_Parrot"]);

        let results = filter_and_sort(&table(), "in", &[], &RelevanceComparator);
        assert_eq!(names(&results), ["grin", "grinning", "Smiling_Parrot"]);
    }

    #[test]
    fn test_recent_matches_come_first() {
        // smiley_cat would rank after smile on relevance alone
        let recent = vec![EmojiId::from("smiley_cat")];
        let results = filter_and_sort(&table(), "smil", &recent, &RelevanceComparator);
        assert_eq!(names(&results), ["smiley_cat", "smile", "Smiling_Parrot"]);
    }

    #[test]
    fn test_recent_by_id() {
        let recent = vec![EmojiId::from("c1")];
        let results = filter_and_sort(&table(), "smil", &recent, &RelevanceComparator);
        assert_eq!(names(&results)[0], "Smiling_Parrot");
    }

    #[test]
    fn test_recent_alias_ignores_case() {
        let recent = vec![EmojiId::from("SMILING_PARROT")];
        let results = filter_and_sort(&table(), "smil", &recent, &RelevanceComparator);
        assert_eq!(names(&results)[0], "Smiling_Parrot");
    }

    #[test]
    fn test_custom_comparator() {
        let reverse = |a: &Emoji, b: &Emoji, _: &str| b.name().cmp(a.name());
        let results = filter_and_sort(&table(), "grin", &[], &reverse);
        assert_eq!(names(&results), ["grinning", "grin"]);
    }
}

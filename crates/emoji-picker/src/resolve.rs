//! Resolution of a category to the emojis it shows.

use std::collections::HashSet;

use emoji_core::{
    Categories, Category, Emoji, EmojiId, EmojiTable, PickerError, SkinTone, UnifiedIndex,
};

use crate::search::{filter_and_sort, EmojiComparator};
use crate::skin_tone::{apply_user_skin_tone, skin_of};

/// Everything the picker derives its rows from.
///
/// All fields are borrowed; the same input always produces the same output.
#[derive(Debug, Clone, Copy)]
pub struct PickerInput<'a> {
    /// Search text. Empty means category browsing.
    pub filter: &'a str,

    /// Categories in display order, without the synthetic recent category.
    pub categories: &'a Categories,

    /// Every emoji the picker may show.
    pub emojis: &'a EmojiTable,

    /// Lookup used for skin tone substitution.
    pub unified: &'a UnifiedIndex,

    /// Recently used emoji ids, most relevant first.
    pub recent: &'a [EmojiId],

    /// The user's preferred skin tone.
    pub skin_tone: &'a SkinTone,
}

impl PickerInput<'_> {
    pub fn is_searching(&self) -> bool {
        !self.filter.is_empty()
    }
}

/// Emojis shown under `category`.
///
/// While searching the category is ignored and the search results are
/// returned instead. The recent category is toned to the user's skin and
/// de-duplicated; other categories map their static ids through the table.
pub fn resolve_emojis<C>(
    category: &Category,
    input: &PickerInput<'_>,
    comparator: &C,
) -> Result<Vec<Emoji>, PickerError>
where
    C: EmojiComparator + ?Sized,
{
    if input.is_searching() {
        return Ok(filter_and_sort(
            input.emojis,
            input.filter,
            input.recent,
            comparator,
        ));
    }

    if category.name.is_recent() {
        return resolve_recent(input);
    }

    category
        .emoji_ids
        .iter()
        .map(|id| lookup(input.emojis, id).cloned())
        .collect()
}

fn resolve_recent(input: &PickerInput<'_>) -> Result<Vec<Emoji>, PickerError> {
    let mut seen = HashSet::new();
    let mut emojis = Vec::with_capacity(input.recent.len());

    for id in input.recent {
        let emoji = lookup(input.emojis, id)?;

        // Two ids may tone to the same emoji; the first one wins.
        let (key, emoji) = match skin_of(emoji) {
            Some(skin) => {
                let toned = apply_user_skin_tone(emoji, &skin, input.skin_tone, input.unified)?;
                (toned.id(), toned)
            }
            None => (id.clone(), emoji.clone()),
        };

        if seen.insert(key) {
            emojis.push(emoji);
        }
    }

    Ok(emojis)
}

fn lookup<'a>(emojis: &'a EmojiTable, id: &EmojiId) -> Result<&'a Emoji, PickerError> {
    emojis
        .get(id)
        .ok_or_else(|| PickerError::UnknownEmoji(id.clone()))
}

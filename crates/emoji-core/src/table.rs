//! The static emoji dataset and its lookup indices.
//!
//! Both structures are built once at startup and passed explicitly to the
//! picker. Nothing here is global or mutable after construction.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::emoji::{Emoji, EmojiId};
use crate::error::DatasetError;

/// All emojis the picker may show, keyed by id.
///
/// Iteration follows id order, so every pass over the table is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiTable {
    emojis: BTreeMap<EmojiId, Emoji>,
}

impl EmojiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting duplicate ids.
    pub fn from_emojis(emojis: impl IntoIterator<Item = Emoji>) -> Result<Self, DatasetError> {
        let mut table = Self::new();
        for emoji in emojis {
            table.insert(emoji)?;
        }
        Ok(table)
    }

    /// Parse a JSON array of emoji records.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let emojis: Vec<Emoji> = serde_json::from_str(json)?;
        Self::from_emojis(emojis)
    }

    /// Load a JSON dataset from disk.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    fn insert(&mut self, emoji: Emoji) -> Result<(), DatasetError> {
        let id = emoji.id();
        if self.emojis.contains_key(&id) {
            return Err(DatasetError::DuplicateId(id));
        }
        self.emojis.insert(id, emoji);
        Ok(())
    }

    pub fn get(&self, id: &EmojiId) -> Option<&Emoji> {
        self.emojis.get(id)
    }

    pub fn contains(&self, id: &EmojiId) -> bool {
        self.emojis.contains_key(id)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, EmojiId, Emoji> {
        self.emojis.iter()
    }

    pub fn values(&self) -> btree_map::Values<'_, EmojiId, Emoji> {
        self.emojis.values()
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

/// Lookup from lower-cased unified code to system emoji.
///
/// Used by skin tone substitution to resolve a computed code back to an
/// emoji record.
#[derive(Debug, Clone, Default)]
pub struct UnifiedIndex {
    by_unified: HashMap<String, Emoji>,
}

impl UnifiedIndex {
    /// Index every system emoji of `emojis`. Custom emojis have no code
    /// and are skipped.
    pub fn from_emojis<'a>(emojis: impl IntoIterator<Item = &'a Emoji>) -> Self {
        let by_unified = emojis
            .into_iter()
            .filter_map(|emoji| {
                emoji
                    .unified()
                    .map(|code| (code.to_lowercase(), emoji.clone()))
            })
            .collect();
        Self { by_unified }
    }

    /// Index a whole table.
    pub fn from_table(table: &EmojiTable) -> Self {
        Self::from_emojis(table.values())
    }

    /// Look up a code, ignoring case.
    pub fn get(&self, unified: &str) -> Option<&Emoji> {
        self.by_unified.get(&unified.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_unified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_unified.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"[
        {"unified": "1F44D", "short_names": ["+1", "thumbsup"], "category": "people-body",
         "skin_variations": {"1F3FB": {"unified": "1F44D-1F3FB"}}},
        {"unified": "1F44D-1F3FB", "short_names": ["+1_light_skin_tone"], "skins": ["1F3FB"]},
        {"id": "c1", "name": "parrot", "category": "custom"}
    ]"#;

    #[test]
    fn test_from_json() {
        let table = EmojiTable::from_json(DATASET).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.contains(&"1f44d".into()));
        assert!(table.contains(&"1f44d-1f3fb".into()));
        assert_eq!(table.get(&"c1".into()).unwrap().name(), "parrot");
    }

    #[test]
    fn test_iteration_is_id_ordered() {
        let table = EmojiTable::from_emojis(vec![
            Emoji::system("1F601", &["grin"]),
            Emoji::custom("a", "alpha"),
            Emoji::system("1F600", &["grinning"]),
        ])
        .unwrap();
        let ids: Vec<_> = table.iter().map(|(id, _)| id.0.as_str()).collect();
        assert_eq!(ids, ["1f600", "1f601", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = EmojiTable::from_emojis(vec![
            Emoji::system("1F600", &["grinning"]),
            Emoji::system("1f600", &["grinning_again"]),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId(id) if id.0 == "1f600"));
    }

    #[test]
    fn test_invalid_json() {
        let err = EmojiTable::from_json("{not json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let table = EmojiTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 3);

        let missing = EmojiTable::load(Path::new("/nonexistent/emoji.json")).unwrap_err();
        assert!(matches!(missing, DatasetError::Io { .. }));
    }

    #[test]
    fn test_unified_index_skips_custom() {
        let table = EmojiTable::from_json(DATASET).unwrap();
        let index = UnifiedIndex::from_table(&table);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("1F44D-1F3FB").unwrap().name(), "+1_light_skin_tone");
        assert_eq!(index.get("1f44d").unwrap().name(), "+1");
        assert!(index.get("c1").is_none());
    }
}

//! Category types and the standard category catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::emoji::EmojiId;
use crate::table::EmojiTable;

/// Stable category key, e.g. "smileys-emotion".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(pub String);

impl CategoryName {
    pub const RECENT: &'static str = "recent";
    pub const SEARCH_RESULTS: &'static str = "searchResults";
    pub const CUSTOM: &'static str = "custom";

    pub fn recent() -> Self {
        Self(Self::RECENT.to_string())
    }

    pub fn search_results() -> Self {
        Self(Self::SEARCH_RESULTS.to_string())
    }

    pub fn custom() -> Self {
        Self(Self::CUSTOM.to_string())
    }

    pub fn is_recent(&self) -> bool {
        self.0 == Self::RECENT
    }

    pub fn is_search_results(&self) -> bool {
        self.0 == Self::SEARCH_RESULTS
    }

    /// The custom category is always last and is never a scroll target.
    pub fn is_custom(&self) -> bool {
        self.0 == Self::CUSTOM
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry: (key, label, icon class).
const CATALOG: &[(&str, &str, &str)] = &[
    ("recent", "Recently Used", "icon-clock-outline"),
    ("searchResults", "Search Results", "icon-magnify"),
    ("smileys-emotion", "Smileys & Emotion", "icon-emoticon-happy-outline"),
    ("people-body", "People & Body", "icon-account-outline"),
    ("animals-nature", "Animals & Nature", "icon-leaf-outline"),
    ("food-drink", "Food & Drink", "icon-food-apple"),
    ("activities", "Activities", "icon-basketball"),
    ("travel-places", "Travel Places", "icon-airplane-variant"),
    ("objects", "Objects", "icon-lightbulb-outline"),
    ("symbols", "Symbols", "icon-heart-outline"),
    ("flags", "Flags", "icon-flag-outline"),
    ("custom", "Custom", "icon-emoticon-custom-outline"),
];

/// A named group of emojis shown as a selectable tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,

    /// Default display label.
    pub label: String,

    /// Icon class for the tab.
    pub icon: String,

    /// Static member list, in display order.
    #[serde(default)]
    pub emoji_ids: Vec<EmojiId>,
}

impl Category {
    /// Create a category, taking label and icon from the catalog when known.
    pub fn new(name: impl Into<CategoryName>, emoji_ids: Vec<EmojiId>) -> Self {
        let name = name.into();
        let (label, icon) = CATALOG
            .iter()
            .find(|(key, _, _)| *key == name.as_str())
            .map(|(_, label, icon)| (label.to_string(), icon.to_string()))
            .unwrap_or_else(|| (name.0.clone(), String::new()));

        Self {
            name,
            label,
            icon,
            emoji_ids,
        }
    }

    /// The synthetic recent category.
    pub fn recent(emoji_ids: Vec<EmojiId>) -> Self {
        Self::new(CategoryName::recent(), emoji_ids)
    }

    /// The synthetic search results category. Its members are computed
    /// from the filter, never stored.
    pub fn search_results() -> Self {
        Self::new(CategoryName::search_results(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.emoji_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.emoji_ids.len()
    }
}

/// Categories in display order.
///
/// Order is the vector order; it never depends on map iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(Vec<Category>);

impl Categories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    /// Group a table into the standard catalog.
    ///
    /// Members keep table order within a category. Emojis with an unknown
    /// or missing category are left out. The synthetic recent and search
    /// categories are not included; empty catalog categories are kept so
    /// the tab strip stays stable.
    pub fn from_table(table: &EmojiTable) -> Self {
        let mut categories: Vec<Category> = CATALOG
            .iter()
            .map(|(key, _, _)| CategoryName::from(*key))
            .filter(|name| !name.is_recent() && !name.is_search_results())
            .map(|name| Category::new(name, Vec::new()))
            .collect();

        for (id, emoji) in table.iter() {
            let key = if emoji.is_custom() {
                CategoryName::CUSTOM
            } else {
                match emoji.category() {
                    Some(key) => key,
                    None => continue,
                }
            };

            if let Some(category) = categories.iter_mut().find(|c| c.name.as_str() == key) {
                category.emoji_ids.push(id.clone());
            }
        }

        Self(categories)
    }

    pub fn get(&self, name: &CategoryName) -> Option<&Category> {
        self.0.iter().find(|c| &c.name == name)
    }

    pub fn contains(&self, name: &CategoryName) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &CategoryName> {
        self.0.iter().map(|c| &c.name)
    }

    pub fn first(&self) -> Option<&Category> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display order with the recent category materialized in front.
    ///
    /// Recent is present exactly when `recent_ids` is non-empty, and always
    /// holds `recent_ids`. A recent category already in the list is replaced.
    pub fn with_recent(&self, recent_ids: &[EmojiId]) -> Categories {
        let rest = self.0.iter().filter(|c| !c.name.is_recent()).cloned();
        if recent_ids.is_empty() {
            return Self(rest.collect());
        }

        let mut categories = Vec::with_capacity(self.0.len() + 1);
        categories.push(Category::recent(recent_ids.to_vec()));
        categories.extend(rest);
        Self(categories)
    }
}

impl FromIterator<Category> for Categories {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::Emoji;

    #[test]
    fn test_catalog_label_lookup() {
        let category = Category::new("food-drink", Vec::new());
        assert_eq!(category.label, "Food & Drink");
        assert_eq!(category.icon, "icon-food-apple");

        let unknown = Category::new("misc", Vec::new());
        assert_eq!(unknown.label, "misc");
        assert!(unknown.icon.is_empty());
    }

    #[test]
    fn test_with_recent_prepends_once() {
        let categories = Categories::new(vec![Category::new("flags", Vec::new())]);

        let unchanged = categories.with_recent(&[]);
        assert_eq!(unchanged.len(), 1);

        let with_recent = categories.with_recent(&["1f600".into()]);
        let names: Vec<_> = with_recent.names().map(CategoryName::as_str).collect();
        assert_eq!(names, ["recent", "flags"]);

        // Already present: replaced, not added twice
        let again = with_recent.with_recent(&["1f601".into()]);
        assert_eq!(again.len(), 2);
        assert_eq!(again.first().unwrap().emoji_ids, vec![EmojiId::from("1f601")]);
    }

    #[test]
    fn test_with_recent_drops_stale_recent() {
        let categories = Categories::new(vec![
            Category::new("flags", Vec::new()),
            Category::recent(vec!["1f600".into()]),
        ]);

        let names: Vec<_> = categories.with_recent(&[]).names().cloned().collect();
        assert_eq!(names, vec![CategoryName::from("flags")]);

        let moved = categories.with_recent(&["1f44d".into()]);
        let names: Vec<_> = moved.names().map(CategoryName::as_str).collect();
        assert_eq!(names, ["recent", "flags"]);
        assert_eq!(moved.first().unwrap().emoji_ids, vec![EmojiId::from("1f44d")]);
    }

    #[test]
    fn test_from_table_groups_by_category() {
        let table = EmojiTable::from_emojis(vec![
            Emoji::system("1F600", &["grinning"]).with_category("smileys-emotion"),
            Emoji::system("1F1FA-1F1F8", &["us"]).with_category("flags"),
            Emoji::system("1F601", &["grin"]).with_category("smileys-emotion"),
            Emoji::system("2764", &["heart"]),
            Emoji::custom("c1", "parrot"),
        ])
        .unwrap();

        let categories = Categories::from_table(&table);
        let names: Vec<_> = categories.names().map(CategoryName::as_str).collect();
        assert_eq!(
            names,
            [
                "smileys-emotion",
                "people-body",
                "animals-nature",
                "food-drink",
                "activities",
                "travel-places",
                "objects",
                "symbols",
                "flags",
                "custom",
            ]
        );

        let smileys = categories.get(&"smileys-emotion".into()).unwrap();
        assert_eq!(smileys.emoji_ids, vec![EmojiId::from("1f600"), EmojiId::from("1f601")]);
        assert_eq!(categories.get(&"flags".into()).unwrap().len(), 1);
        assert_eq!(categories.get(&CategoryName::custom()).unwrap().len(), 1);
        assert!(categories.get(&"people-body".into()).unwrap().is_empty());
    }
}

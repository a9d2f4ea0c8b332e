//! Emoji record types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::skin::SkinTone;

/// Stable emoji identifier.
///
/// System emojis are keyed by their lower-cased unified code, custom emojis
/// by the id assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiId(pub String);

impl From<String> for EmojiId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmojiId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EmojiId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmojiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An alternate rendering of a system emoji for one skin tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinVariation {
    /// Unified code of the toned emoji, e.g. "1F44D-1F3FB".
    pub unified: String,
}

/// A built-in Unicode emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEmoji {
    /// Hyphen-separated code points, e.g. "1F44D".
    pub unified: String,

    /// Aliases used for search, primary alias first.
    pub short_names: Vec<String>,

    /// Category key from the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Present on default-skin emojis that support tones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_variations: Option<BTreeMap<SkinTone, SkinVariation>>,

    /// Present on toned variants: the tones applied to this emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<SkinTone>>,
}

/// A server-defined emoji uploaded by users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEmoji {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An emoji the picker can show.
///
/// Records are immutable once loaded; the picker only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Emoji {
    System(SystemEmoji),
    Custom(CustomEmoji),
}

impl Emoji {
    /// Create a system emoji with no tone support.
    pub fn system(unified: impl Into<String>, short_names: &[&str]) -> Self {
        Emoji::System(SystemEmoji {
            unified: unified.into(),
            short_names: short_names.iter().map(|s| s.to_string()).collect(),
            category: None,
            skin_variations: None,
            skins: None,
        })
    }

    /// Create a custom emoji.
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Emoji::Custom(CustomEmoji {
            id: id.into(),
            name: name.into(),
            category: Some("custom".to_string()),
        })
    }

    /// Set the dataset category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        match &mut self {
            Emoji::System(e) => e.category = Some(category.into()),
            Emoji::Custom(e) => e.category = Some(category.into()),
        }
        self
    }

    /// Attach a skin variation table. No-op for custom emojis.
    pub fn with_skin_variations<I, T, U>(mut self, variations: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: Into<SkinTone>,
        U: Into<String>,
    {
        if let Emoji::System(e) = &mut self {
            e.skin_variations = Some(
                variations
                    .into_iter()
                    .map(|(tone, unified)| {
                        (
                            tone.into(),
                            SkinVariation {
                                unified: unified.into(),
                            },
                        )
                    })
                    .collect(),
            );
        }
        self
    }

    /// Mark this emoji as a toned variant. No-op for custom emojis.
    pub fn with_skins<I, T>(mut self, skins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SkinTone>,
    {
        if let Emoji::System(e) = &mut self {
            e.skins = Some(skins.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Table key for this emoji.
    pub fn id(&self) -> EmojiId {
        match self {
            Emoji::System(e) => EmojiId(e.unified.to_lowercase()),
            Emoji::Custom(e) => EmojiId(e.id.clone()),
        }
    }

    /// All aliases, primary first.
    pub fn aliases(&self) -> &[String] {
        match self {
            Emoji::System(e) => &e.short_names,
            Emoji::Custom(e) => std::slice::from_ref(&e.name),
        }
    }

    /// Primary alias, used for display and sorting.
    pub fn name(&self) -> &str {
        self.aliases().first().map(String::as_str).unwrap_or_default()
    }

    /// Unified code for system emojis.
    pub fn unified(&self) -> Option<&str> {
        match self {
            Emoji::System(e) => Some(&e.unified),
            Emoji::Custom(_) => None,
        }
    }

    /// Dataset category key.
    pub fn category(&self) -> Option<&str> {
        match self {
            Emoji::System(e) => e.category.as_deref(),
            Emoji::Custom(e) => e.category.as_deref(),
        }
    }

    /// Check if any alias contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-cased.
    pub fn alias_contains(&self, needle: &str) -> bool {
        self.aliases()
            .iter()
            .any(|alias| alias.to_lowercase().contains(needle))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Emoji::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_emoji_from_json() {
        let json = r#"{
            "unified": "1F44D",
            "short_names": ["+1", "thumbsup"],
            "category": "people-body",
            "skin_variations": {"1F3FB": {"unified": "1F44D-1F3FB"}}
        }"#;
        let emoji: Emoji = serde_json::from_str(json).unwrap();

        assert!(!emoji.is_custom());
        assert_eq!(emoji.id(), EmojiId::from("1f44d"));
        assert_eq!(emoji.name(), "+1");
        assert_eq!(emoji.category(), Some("people-body"));
        match emoji {
            Emoji::System(e) => {
                let variations = e.skin_variations.unwrap();
                assert_eq!(variations[&SkinTone::from("1F3FB")].unified, "1F44D-1F3FB");
            }
            Emoji::Custom(_) => panic!("expected system emoji"),
        }
    }

    #[test]
    fn test_custom_emoji_from_json() {
        let json = r#"{"id": "abc123", "name": "parrot", "category": "custom"}"#;
        let emoji: Emoji = serde_json::from_str(json).unwrap();

        assert!(emoji.is_custom());
        assert_eq!(emoji.id(), EmojiId::from("abc123"));
        assert_eq!(emoji.aliases(), ["parrot".to_string()]);
        assert_eq!(emoji.unified(), None);
    }

    #[test]
    fn test_alias_contains_ignores_case() {
        let emoji = Emoji::system("1F600", &["Grinning", "smile"]);
        assert!(emoji.alias_contains("grin"));
        assert!(emoji.alias_contains("mil"));
        assert!(!emoji.alias_contains("frown"));
    }

    #[test]
    fn test_with_skins_ignored_on_custom() {
        let emoji = Emoji::custom("x", "party").with_skins(["1F3FB"]);
        assert_eq!(emoji, Emoji::custom("x", "party"));
    }
}

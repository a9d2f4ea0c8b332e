//! Error types for the emoji picker.

use std::path::PathBuf;
use thiserror::Error;

use crate::category::CategoryName;
use crate::emoji::EmojiId;
use crate::skin::SkinTone;

/// Failures while resolving emojis and laying out rows.
///
/// These only occur with a malformed dataset or geometry that skipped
/// validation, and point at a bug upstream rather than at user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// A category or recent list referenced an id missing from the table.
    #[error("Unknown emoji id: {0}")]
    UnknownEmoji(EmojiId),

    /// Skin tone substitution produced a code with no emoji.
    #[error("No emoji for unified code: {0}")]
    UnknownUnified(String),

    /// A base emoji has a variation table without the requested tone.
    #[error("Emoji '{emoji}' has no variation for skin tone {tone}")]
    MissingSkinVariation { emoji: EmojiId, tone: SkinTone },

    /// Cumulative row height no longer fits the offset table.
    #[error("Layout height overflows at category {0}")]
    LayoutOverflow(CategoryName),
}

/// Errors loading the emoji dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// IO error.
    #[error("Failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Malformed JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("Duplicate emoji id: {0}")]
    DuplicateId(EmojiId),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value outside its valid range.
    #[error("Invalid value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

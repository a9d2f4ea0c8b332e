//! Core types for the emoji picker.
//!
//! This crate contains the data structures shared by the picker:
//! - Emoji records and ids
//! - Skin tones
//! - Categories and the standard catalog
//! - The emoji table and unified-code index
//! - Configuration types
//! - Error types

mod category;
mod config;
mod emoji;
mod error;
mod skin;
mod table;

pub use category::{Categories, Category, CategoryName};
pub use config::{
    config_dir, config_path, LayoutConfig, PickerConfig, CATEGORY_HEADER_ROW_HEIGHT,
    EMOJI_CONTAINER_HEIGHT, EMOJI_PER_ROW, EMOJI_ROW_HEIGHT, MAX_EMOJI_PER_ROW, MAX_ROW_HEIGHT,
};
pub use emoji::{CustomEmoji, Emoji, EmojiId, SkinVariation, SystemEmoji};
pub use error::{ConfigError, DatasetError, PickerError};
pub use skin::SkinTone;
pub use table::{EmojiTable, UnifiedIndex};

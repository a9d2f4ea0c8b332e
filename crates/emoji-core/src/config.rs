//! Configuration types.
//!
//! Settings live in `picker.toml` under the user's config directory. Every
//! field has a default, so a missing file or a partial file both work.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::skin::SkinTone;

/// Emojis per row in the results list.
pub const EMOJI_PER_ROW: usize = 9;

/// Height in pixels of an emoji row.
pub const EMOJI_ROW_HEIGHT: u32 = 36;

/// Height in pixels of a category header row.
pub const CATEGORY_HEADER_ROW_HEIGHT: u32 = 32;

/// Height in pixels of the scrollable results container.
pub const EMOJI_CONTAINER_HEIGHT: u32 = 290;

/// Largest accepted row or header height, in pixels.
pub const MAX_ROW_HEIGHT: u32 = 1024;

/// Largest accepted number of emojis per row.
pub const MAX_EMOJI_PER_ROW: usize = 64;

/// Runtime configuration loaded from picker.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Row geometry
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Skin tone applied to recent emojis
    #[serde(default)]
    pub skin_tone: SkinTone,
}

/// Row geometry shared by the layout builder and the viewport.
///
/// Offsets are precomputed from these values rather than measured, so the
/// renderer must use the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub emoji_per_row: usize,
    pub emoji_row_height: u32,
    pub category_header_height: u32,
    pub container_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            emoji_per_row: EMOJI_PER_ROW,
            emoji_row_height: EMOJI_ROW_HEIGHT,
            category_header_height: CATEGORY_HEADER_ROW_HEIGHT,
            container_height: EMOJI_CONTAINER_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Reject geometry the layout builder cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("layout.emoji_per_row", self.emoji_per_row, 1, MAX_EMOJI_PER_ROW)?;
        check_range("layout.emoji_row_height", self.emoji_row_height, 0, MAX_ROW_HEIGHT)?;
        check_range(
            "layout.category_header_height",
            self.category_header_height,
            1,
            MAX_ROW_HEIGHT,
        )?;
        Ok(())
    }
}

fn check_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<(), ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ConfigError::Invalid {
            field,
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

impl PickerConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&source)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("emoji-picker"))
}

/// Get the path to picker.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("picker.toml"))
}

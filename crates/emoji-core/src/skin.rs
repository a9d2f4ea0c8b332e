//! Skin tone identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A skin tone modifier code, e.g. "1F3FB".
///
/// The special value "default" means no modifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkinTone(String);

impl SkinTone {
    pub const DEFAULT: &'static str = "default";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The unmodified (yellow) tone.
    pub fn default_tone() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SkinTone {
    fn default() -> Self {
        Self::default_tone()
    }
}

impl From<&str> for SkinTone {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SkinTone {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

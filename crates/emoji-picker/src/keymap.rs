//! Arrow-key navigation.
//!
//! Left/right step one emoji, up/down step one row. Keys arrive as names
//! ("right", "ArrowRight", "arrow_right") and are matched ignoring case.

use crate::host::PickerHost;

// =============================================================================
// Keystroke Parsing
// =============================================================================

/// Arrow keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
}

/// Lower-case and drop any "arrow" prefix.
///
/// "ArrowRight", "arrow_right" and "right" all become "right".
fn normalize_keystroke(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    lower
        .strip_prefix("arrow")
        .map(|rest| rest.trim_start_matches(['_', '-', '+']))
        .unwrap_or(lower.as_str())
        .to_string()
}

impl NavKey {
    pub fn parse(key: &str) -> Option<Self> {
        match normalize_keystroke(key).as_str() {
            "left" => Some(NavKey::Left),
            "right" => Some(NavKey::Right),
            "up" => Some(NavKey::Up),
            "down" => Some(NavKey::Down),
            _ => None,
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// A requested selection move, in emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next(usize),
    Prev(usize),
}

impl Navigation {
    /// Map a key to a move. Vertical moves span a whole row.
    pub fn for_key(key: NavKey, emoji_per_row: usize) -> Self {
        match key {
            NavKey::Right => Navigation::Next(1),
            NavKey::Left => Navigation::Prev(1),
            NavKey::Down => Navigation::Next(emoji_per_row),
            NavKey::Up => Navigation::Prev(emoji_per_row),
        }
    }

    /// Signed emoji offset: positive moves forward.
    pub fn offset(self) -> isize {
        match self {
            Navigation::Next(n) => n as isize,
            Navigation::Prev(n) => -(n as isize),
        }
    }

    /// Forward the move to the host.
    pub fn dispatch(self, host: &mut impl PickerHost) {
        match self {
            Navigation::Next(n) => host.select_next_emoji(n),
            Navigation::Prev(n) => host.select_prev_emoji(n),
        }
    }
}

/// Handle a key press inside the category bar.
///
/// Arrow keys move the selection. Every key, arrow or not, sends focus back
/// to the search input afterwards.
pub fn handle_key(
    key: &str,
    emoji_per_row: usize,
    host: &mut impl PickerHost,
) -> Option<Navigation> {
    let navigation = NavKey::parse(key).map(|k| Navigation::for_key(k, emoji_per_row));

    if let Some(navigation) = navigation {
        tracing::trace!(key, ?navigation, "Category bar navigation");
        navigation.dispatch(host);
    }

    host.focus_search_input();
    navigation
}

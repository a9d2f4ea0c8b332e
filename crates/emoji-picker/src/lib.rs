//! Emoji picker engine.
//!
//! Turns the static emoji dataset plus the user's filter, recent emojis and
//! skin tone into the rows of a virtualized results list, and keeps the
//! category tabs, keyboard selection and scroll position in sync.
//!
//! - [`layout`]: rows and per-category scroll offsets
//! - [`resolve`]: the emojis shown under one category
//! - [`search`]: alias filtering and recent-first ordering
//! - [`skin_tone`]: skin tone substitution
//! - [`model`]: host-side picker state and the category bar
//! - [`keymap`]: arrow-key navigation

pub mod host;
pub mod keymap;
pub mod layout;
pub mod model;
pub mod resolve;
pub mod search;
pub mod skin_tone;

pub use host::PickerHost;
pub use keymap::{handle_key, NavKey, Navigation};
pub use layout::{build_rows, build_rows_with, CategoryOffsets, Row, RowLayout};
pub use model::{CategoryBar, CategoryTab, PickerState};
pub use resolve::{resolve_emojis, PickerInput};
pub use search::{filter_and_sort, EmojiComparator, RelevanceComparator};
pub use skin_tone::{apply_user_skin_tone, skin_of};

//! Callbacks from picker widgets into host-owned state.
//!
//! Widgets never mutate picker state directly. They report what the user
//! did through this trait and the host decides what changes.

use emoji_core::CategoryName;

/// One-way notifications to the host.
#[cfg_attr(test, mockall::automock)]
pub trait PickerHost {
    /// A category tab was chosen.
    fn set_active_category(&mut self, category: CategoryName);

    /// Move the emoji selection forward by `offset` emojis.
    fn select_next_emoji(&mut self, offset: usize);

    /// Move the emoji selection back by `offset` emojis.
    fn select_prev_emoji(&mut self, offset: usize);

    /// Return keyboard focus to the search box.
    fn focus_search_input(&mut self);
}

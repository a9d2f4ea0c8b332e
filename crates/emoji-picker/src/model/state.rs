//! Host-side picker state.
//!
//! `PickerState` owns the dataset and the user-driven inputs (filter, skin
//! tone, recent emojis) and keeps a `RowLayout` derived from them. Any input
//! change rebuilds the layout from scratch. Widgets talk to it through
//! `PickerHost`, and scroll events feed back the active category.

use emoji_core::{
    Categories, CategoryName, Emoji, EmojiId, EmojiTable, LayoutConfig, PickerConfig, PickerError,
    SkinTone, UnifiedIndex,
};

use crate::host::PickerHost;
use crate::layout::{build_rows, RowLayout};
use crate::model::category_bar::CategoryBar;
use crate::resolve::PickerInput;

// =============================================================================
// Picker State
// =============================================================================

/// Everything the picker UI renders from.
#[derive(Debug)]
pub struct PickerState {
    // -------------------------------------------------------------------------
    // Dataset
    // -------------------------------------------------------------------------
    emojis: EmojiTable,
    unified: UnifiedIndex,
    categories: Categories,
    config: LayoutConfig,

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------
    filter: String,
    skin_tone: SkinTone,
    recent: Vec<EmojiId>,

    // -------------------------------------------------------------------------
    // UI State
    // -------------------------------------------------------------------------
    active_category: CategoryName,

    /// Flat index into the visible emojis.
    cursor_index: usize,

    search_focused: bool,

    /// Derived from the inputs above.
    layout: RowLayout,
}

impl PickerState {
    /// Create the state and build the initial layout.
    ///
    /// The unified index is built here from the same table; skin tone
    /// substitution only ever resolves to emojis the picker can show.
    pub fn new(
        emojis: EmojiTable,
        categories: Categories,
        config: &PickerConfig,
    ) -> Result<Self, PickerError> {
        let unified = UnifiedIndex::from_table(&emojis);
        let active_category = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(CategoryName::search_results);

        let mut state = Self {
            emojis,
            unified,
            categories,
            config: config.layout,
            filter: String::new(),
            skin_tone: config.skin_tone.clone(),
            recent: Vec::new(),
            active_category,
            cursor_index: 0,
            search_focused: true,
            layout: RowLayout::empty(config.layout),
        };
        state.layout = build_rows(&state.input(), &state.config)?;
        Ok(state)
    }

    fn input(&self) -> PickerInput<'_> {
        PickerInput {
            filter: &self.filter,
            categories: &self.categories,
            emojis: &self.emojis,
            unified: &self.unified,
            recent: &self.recent,
            skin_tone: &self.skin_tone,
        }
    }

    /// Recompute the layout. On a lookup failure the previous layout stays.
    fn rebuild(&mut self) -> bool {
        let result = build_rows(&self.input(), &self.config);
        match result {
            Ok(layout) => {
                self.layout = layout;
                self.clamp_cursor();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to rebuild emoji rows");
                false
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.layout.emoji_count();
        if self.cursor_index >= count {
            self.cursor_index = count.saturating_sub(1);
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn skin_tone(&self) -> &SkinTone {
        &self.skin_tone
    }

    pub fn recent(&self) -> &[EmojiId] {
        &self.recent
    }

    pub fn active_category(&self) -> &CategoryName {
        &self.active_category
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn is_searching(&self) -> bool {
        !self.filter.is_empty()
    }

    /// The empty-state indicator should replace the list.
    pub fn is_search_empty(&self) -> bool {
        self.layout.is_search_empty(&self.filter)
    }

    /// Emoji under the cursor.
    pub fn selected_emoji(&self) -> Option<&Emoji> {
        self.layout.emoji_at(self.cursor_index)
    }

    /// Tab strip for the current state.
    pub fn category_bar(&self) -> CategoryBar {
        CategoryBar::new(
            &self.categories,
            &self.recent,
            &self.filter,
            &self.active_category,
            self.config.emoji_per_row,
        )
    }

    // -------------------------------------------------------------------------
    // Input Changes
    // -------------------------------------------------------------------------

    // A change whose rebuild fails is rolled back, so the layout always
    // matches the inputs.

    /// Update the search text. The cursor returns to the first result.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter == self.filter {
            return;
        }
        let previous = std::mem::replace(&mut self.filter, filter);
        let previous_cursor = std::mem::replace(&mut self.cursor_index, 0);
        if !self.rebuild() {
            self.filter = previous;
            self.cursor_index = previous_cursor;
        }
    }

    pub fn set_skin_tone(&mut self, skin_tone: SkinTone) {
        if skin_tone == self.skin_tone {
            return;
        }
        let previous = std::mem::replace(&mut self.skin_tone, skin_tone);
        if !self.rebuild() {
            self.skin_tone = previous;
        }
    }

    /// Replace the recent list, most relevant first.
    pub fn set_recent(&mut self, recent: Vec<EmojiId>) {
        if recent == self.recent {
            return;
        }
        let previous = std::mem::replace(&mut self.recent, recent);
        if !self.rebuild() {
            self.recent = previous;
        }
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// A category tab was clicked.
    ///
    /// Moves the cursor to the category's first emoji and returns the row to
    /// scroll to. Ignored while searching and for categories the layout does
    /// not show.
    pub fn on_category_select(&mut self, category: CategoryName) -> Option<usize> {
        if self.is_searching() {
            tracing::debug!(%category, "Ignoring category select while searching");
            return None;
        }

        let Some(row_index) = self.layout.offsets().row_index_of(&category) else {
            tracing::debug!(%category, "Ignoring select of a category not in the layout");
            return None;
        };
        if let Some(first) = self.layout.first_emoji_index(&category) {
            self.cursor_index = first;
        }
        self.update_active_category(category);
        Some(row_index)
    }

    /// The results list scrolled to `scroll_offset` pixels.
    ///
    /// Returns the new active category when it changed. Scroll sync is off
    /// while searching since there is only the one results category.
    pub fn on_scroll_offset(&mut self, scroll_offset: f32) -> Option<CategoryName> {
        if self.is_searching() {
            return None;
        }

        let category = self.layout.offsets().category_at(scroll_offset)?.clone();
        if self.update_active_category(category.clone()) {
            Some(category)
        } else {
            None
        }
    }

    /// Move the cursor by `offset` emojis, clamped to the visible emojis.
    ///
    /// Returns the row holding the new cursor so the viewport can scroll it
    /// into view.
    pub fn on_key_navigate(&mut self, offset: isize) -> Option<usize> {
        let count = self.layout.emoji_count();
        if count == 0 {
            return None;
        }

        let last = (count - 1) as isize;
        self.cursor_index = (self.cursor_index as isize + offset).clamp(0, last) as usize;
        self.layout.row_of_emoji(self.cursor_index)
    }

    /// Set the active category. Setting the current one is a no-op, which
    /// keeps scroll-driven updates from feeding back into scrolling.
    fn update_active_category(&mut self, category: CategoryName) -> bool {
        if category == self.active_category {
            return false;
        }
        tracing::debug!(from = %self.active_category, to = %category, "Active category changed");
        self.active_category = category;
        true
    }
}

impl PickerHost for PickerState {
    fn set_active_category(&mut self, category: CategoryName) {
        self.on_category_select(category);
    }

    fn select_next_emoji(&mut self, offset: usize) {
        self.on_key_navigate(offset as isize);
    }

    fn select_prev_emoji(&mut self, offset: usize) {
        self.on_key_navigate(-(offset as isize));
    }

    fn focus_search_input(&mut self) {
        self.search_focused = true;
    }
}

// =============================================================================
// Tests
// =============================================================================

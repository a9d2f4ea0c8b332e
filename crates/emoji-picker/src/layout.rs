//! Row layout for the virtualized results list.
//!
//! The results list is a flat sequence of rows: one header per category
//! followed by that category's emojis in fixed-width rows. Alongside the
//! rows we record, per category, the cumulative pixel height and starting
//! row index. The viewport uses these to map a scroll offset back to a
//! category and a category click to a row, without measuring anything.
//!
//! ```text
//! row  0  ── header: smileys-emotion ──┐
//! row  1  😀 😃 😄 😁 😆 😅 🤣 😂 🙂   │ offset[0] = 32 + 2 * 36
//! row  2  🙃                           ┘
//! row  3  ── header: people-body ──────┐
//! row  4  👋 🤚 🖐                      ┘ offset[1] = offset[0] + 32 + 36
//! ```

use emoji_core::{Categories, Category, CategoryName, Emoji, LayoutConfig, PickerError};

use crate::resolve::{resolve_emojis, PickerInput};
use crate::search::{EmojiComparator, RelevanceComparator};

// =============================================================================
// Row
// =============================================================================

/// One rendered unit of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Category title.
    CategoryHeader(CategoryName),

    /// Up to `emoji_per_row` emojis. Only the last row of a category may be
    /// shorter.
    Emojis(Vec<Emoji>),
}

impl Row {
    /// Stable key for the virtualized list.
    pub fn key(&self) -> String {
        match self {
            Row::CategoryHeader(name) => name.to_string(),
            Row::Emojis(emojis) => emojis
                .iter()
                .map(Emoji::name)
                .collect::<Vec<_>>()
                .join("--"),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Row::CategoryHeader(_))
    }

    pub fn emojis(&self) -> &[Emoji] {
        match self {
            Row::CategoryHeader(_) => &[],
            Row::Emojis(emojis) => emojis,
        }
    }
}

// =============================================================================
// Category Offsets
// =============================================================================

/// Per-category scroll bookkeeping.
///
/// `offsets[i]` is the pixel height of everything up to and including
/// `categories[i]`, so it is where the next category starts. `row_indices`
/// starts with 0 and gets one entry per category except the custom one,
/// which is last and never scrolled to. Both vectors strictly increase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOffsets {
    pub categories: Vec<CategoryName>,
    pub offsets: Vec<u32>,
    pub row_indices: Vec<usize>,
}

impl Default for CategoryOffsets {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            offsets: Vec::new(),
            row_indices: vec![0],
        }
    }
}

impl CategoryOffsets {
    /// Category under a scroll position.
    ///
    /// The first category whose end offset is strictly greater than
    /// `scroll_offset` wins, so an offset exactly on a boundary belongs to
    /// the next category. Past the last offset there is no category.
    pub fn category_at(&self, scroll_offset: f32) -> Option<&CategoryName> {
        self.offsets
            .iter()
            .position(|&offset| scroll_offset < offset as f32)
            .and_then(|index| self.categories.get(index))
    }

    /// Row index of a category's header, for scrolling to it.
    pub fn row_index_of(&self, name: &CategoryName) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c == name)
            .and_then(|index| self.row_indices.get(index).copied())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// =============================================================================
// Row Layout
// =============================================================================

/// Rows and offsets for one set of picker inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    rows: Vec<Row>,
    offsets: CategoryOffsets,
    config: LayoutConfig,
}

impl RowLayout {
    /// Layout with no rows.
    pub fn empty(config: LayoutConfig) -> Self {
        Self {
            rows: Vec::new(),
            offsets: CategoryOffsets::default(),
            config,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn offsets(&self) -> &CategoryOffsets {
        &self.offsets
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Height of the row at `index`.
    pub fn row_height(&self, index: usize) -> u32 {
        match self.rows.get(index) {
            Some(Row::CategoryHeader(_)) => self.config.category_header_height,
            _ => self.config.emoji_row_height,
        }
    }

    pub fn row_key(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(Row::key)
    }

    /// Total scrollable height.
    pub fn content_height(&self) -> u32 {
        self.offsets.offsets.last().copied().unwrap_or(0)
    }

    /// True when a search matched nothing: only the results header remains.
    pub fn is_search_empty(&self, filter: &str) -> bool {
        !filter.is_empty()
            && matches!(
                self.rows.as_slice(),
                [Row::CategoryHeader(name)] if name.is_search_results()
            )
    }

    /// Every visible emoji in display order.
    pub fn emojis(&self) -> impl Iterator<Item = &Emoji> {
        self.rows.iter().flat_map(Row::emojis)
    }

    pub fn emoji_count(&self) -> usize {
        self.emojis().count()
    }

    /// Emoji at a flat display position.
    pub fn emoji_at(&self, flat_index: usize) -> Option<&Emoji> {
        self.emojis().nth(flat_index)
    }

    /// Flat position of the first emoji under `name`.
    pub fn first_emoji_index(&self, name: &CategoryName) -> Option<usize> {
        let mut count = 0;
        let mut rows = self.rows.iter();

        for row in rows.by_ref() {
            match row {
                Row::CategoryHeader(header) if header == name => break,
                row => count += row.emojis().len(),
            }
        }

        // The category must have at least one emoji row after its header.
        match rows.next() {
            Some(Row::Emojis(_)) => Some(count),
            _ => None,
        }
    }

    /// Row index holding the emoji at a flat position.
    pub fn row_of_emoji(&self, flat_index: usize) -> Option<usize> {
        let mut remaining = flat_index;
        for (row_index, row) in self.rows.iter().enumerate() {
            let len = row.emojis().len();
            if remaining < len {
                return Some(row_index);
            }
            remaining -= len;
        }
        None
    }

    /// Category owning the emoji at a flat position.
    pub fn category_of_emoji(&self, flat_index: usize) -> Option<&CategoryName> {
        let row_index = self.row_of_emoji(flat_index)?;
        self.rows[..row_index].iter().rev().find_map(|row| match row {
            Row::CategoryHeader(name) => Some(name),
            Row::Emojis(_) => None,
        })
    }

    /// Plain-text rendering, one row per line.
    pub fn render_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| match row {
                Row::CategoryHeader(name) => format!("# {name}"),
                Row::Emojis(emojis) => emojis
                    .iter()
                    .map(|e| format!(":{}:", e.name()))
                    .collect::<Vec<_>>()
                    .join(" "),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Build rows and offsets using the default relevance ordering for search.
pub fn build_rows(
    input: &PickerInput<'_>,
    config: &LayoutConfig,
) -> Result<RowLayout, PickerError> {
    build_rows_with(input, config, &RelevanceComparator)
}

/// Build rows and offsets with a custom search comparator.
///
/// A non-empty filter collapses everything into the search results
/// category. Otherwise categories appear in the given order with recent
/// emojis first when there are any.
pub fn build_rows_with<C>(
    input: &PickerInput<'_>,
    config: &LayoutConfig,
    comparator: &C,
) -> Result<RowLayout, PickerError>
where
    C: EmojiComparator + ?Sized,
{
    let per_row = config.emoji_per_row.max(1);
    let categories = if input.is_searching() {
        Categories::new(vec![Category::search_results()])
    } else {
        input.categories.with_recent(input.recent)
    };

    let mut rows = Vec::new();
    let mut offsets = CategoryOffsets::default();
    let mut previous_height = 0u32;
    let mut previous_row_index = 0usize;

    for category in categories.iter() {
        let emojis = resolve_emojis(category, input, comparator)?;

        rows.push(Row::CategoryHeader(category.name.clone()));
        let before = rows.len();
        rows.extend(emojis.chunks(per_row).map(|chunk| Row::Emojis(chunk.to_vec())));
        let row_count = rows.len() - before;

        previous_height = category_height(row_count, config)
            .and_then(|height| previous_height.checked_add(height))
            .ok_or_else(|| PickerError::LayoutOverflow(category.name.clone()))?;
        offsets.offsets.push(previous_height);
        offsets.categories.push(category.name.clone());

        if !category.name.is_custom() {
            previous_row_index += row_count + 1;
            offsets.row_indices.push(previous_row_index);
        }
    }

    tracing::debug!(
        rows = rows.len(),
        categories = offsets.len(),
        searching = input.is_searching(),
        "Built emoji rows"
    );

    Ok(RowLayout {
        rows,
        offsets,
        config: *config,
    })
}

/// Header plus `row_count` emoji rows, or `None` if it does not fit in a u32.
fn category_height(row_count: usize, config: &LayoutConfig) -> Option<u32> {
    u32::try_from(row_count)
        .ok()?
        .checked_mul(config.emoji_row_height)?
        .checked_add(config.category_header_height)
}

//! State model for the emoji picker UI.
//!
//! This module contains the state and view models that drive the picker.
//! All types are renderer-independent for testability.

mod category_bar;
mod state;

pub use category_bar::{CategoryBar, CategoryTab};
pub use state::PickerState;

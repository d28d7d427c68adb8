//! # Application State
//!
//! Core screen state. Domain data only: scroll offsets, layout caches and
//! other presentation state live in the `tui` module.
//!
//! ```text
//! App
//! ├── categories: Stage<Vec<Category>>   // stage 1, loaded once on start
//! ├── products: Stage<Vec<Product>>      // stage 2, per selection
//! ├── selection: Option<Category>        // None until first tap/scroll
//! └── status_message: String             // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::{Category, Product};
use crate::core::pipeline::Stage;

pub struct App {
    pub categories: Stage<Vec<Category>>,
    pub products: Stage<Vec<Product>>,
    pub selection: Option<Category>,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            categories: Stage::new(),
            products: Stage::new(),
            selection: None,
            status_message: String::from("Loading catalog..."),
        }
    }

    /// Categories to show in the strip. Empty unless the stage succeeded.
    pub fn category_labels(&self) -> &[Category] {
        self.categories
            .status()
            .data()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Products to show in the list. Empty unless the stage succeeded.
    pub fn visible_products(&self) -> &[Product] {
        self.products
            .status()
            .data()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Index of the selected category within the strip, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selection.as_ref()?;
        self.category_labels().iter().position(|c| c == selected)
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selection.as_deref() == Some(category)
    }
}

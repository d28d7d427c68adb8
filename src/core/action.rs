//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! User clicks a category? That's `Action::TapCategory(index)`.
//! Catalog responds? That's `Action::ProductsLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! event loop must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{CatalogError, Category, Product};
use crate::core::pipeline::{Fetch, RequestId};
use crate::core::selection::{ScrollSample, end_reached, inferred_index};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Screen mounted: run the categories stage.
    Start,
    /// Explicit tap on the category at this strip index.
    TapCategory(usize),
    /// Scroll-position update from the category strip.
    StripScrolled(ScrollSample),
    CategoriesLoaded {
        request: RequestId,
        result: Result<Vec<Category>, CatalogError>,
    },
    ProductsLoaded {
        request: RequestId,
        category: Category,
        result: Result<Vec<Product>, CatalogError>,
    },
    /// Re-run whichever stage has failed.
    Reload,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Fetch(Fetch),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            if app.categories.latest_request() != 0 {
                debug!("Start ignored: categories already requested");
                return Effect::None;
            }
            begin_categories(app)
        }

        Action::TapCategory(index) => match app.category_labels().get(index).cloned() {
            Some(category) => select(app, category),
            None => {
                warn!("Tap on out-of-range category index {}", index);
                Effect::None
            }
        },

        Action::StripScrolled(sample) => {
            let labels = app.category_labels();
            let count = labels.len();
            if count == 0 {
                return Effect::None;
            }

            // End-of-list takes precedence so a sample causes at most one transition
            if end_reached(&sample) {
                let last = labels[count - 1].clone();
                if !app.is_selected(&last) {
                    debug!("Strip end reached, selecting last category '{}'", last);
                    return select(app, last);
                }
            }

            match inferred_index(&sample, count) {
                Some(index) => {
                    let category = labels[index].clone();
                    select(app, category)
                }
                None => {
                    debug!("Scroll sample maps outside the strip: {:?}", sample);
                    Effect::None
                }
            }
        }

        Action::CategoriesLoaded { request, result } => {
            let message = match &result {
                Ok(categories) => format!("{} categories", categories.len()),
                Err(e) => format!("Categories failed: {}", e),
            };
            if app.categories.resolve(request, result) {
                info!("Categories stage resolved: {}", message);
                app.status_message = message;
            }
            Effect::None
        }

        Action::ProductsLoaded {
            request,
            category,
            result,
        } => {
            let message = match &result {
                Ok(products) => format!("{} products in {}", products.len(), category),
                Err(e) => format!("Products failed: {}", e),
            };
            if app.products.resolve(request, result) {
                info!("Products stage resolved for '{}': {}", category, message);
                app.status_message = message;
            }
            Effect::None
        }

        Action::Reload => {
            if app.categories.status().is_failed() {
                info!("Reloading categories");
                return begin_categories(app);
            }
            match (app.selection.clone(), app.products.status().is_failed()) {
                (Some(category), true) => {
                    info!("Reloading products for '{}'", category);
                    begin_products(app, category)
                }
                _ => Effect::None,
            }
        }

        Action::Quit => Effect::Quit,
    }
}

/// Moves the selection to `category` and starts the products stage, unless
/// it is already selected.
fn select(app: &mut App, category: Category) -> Effect {
    if app.is_selected(&category) {
        return Effect::None;
    }
    info!("Selected category '{}'", category);
    app.selection = Some(category.clone());
    begin_products(app, category)
}

fn begin_categories(app: &mut App) -> Effect {
    let request = app.categories.begin();
    app.status_message = String::from("Loading categories...");
    Effect::Fetch(Fetch::Categories { request })
}

fn begin_products(app: &mut App, category: Category) -> Effect {
    let request = app.products.begin();
    app.status_message = format!("Loading {}...", category);
    Effect::Fetch(Fetch::Products { request, category })
}

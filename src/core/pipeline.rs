//! # Load Pipeline
//!
//! Two independent load stages (categories, products) share the same shape:
//! a [`LoadStatus`] plus the id of the most recently issued request.
//!
//! ```text
//! NotStarted ──begin()──▶ InFlight ──resolve(ok)──▶ Succeeded(data)
//!                            ▲     └─resolve(err)─▶ Failed(message)
//!                            └──────── begin() from any state
//! ```
//!
//! Fetches are never cancelled. Each one carries its [`RequestId`] and
//! [`Stage::resolve`] drops any response that is not for the latest request,
//! so the last request issued wins regardless of arrival order.

use log::{debug, info};

use crate::api::{CatalogError, CatalogSource, Category};
use crate::core::action::Action;

/// Per-stage request tag. Starts at 1; 0 means "never issued".
pub type RequestId = u64;

/// Status of one load stage.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus<T> {
    NotStarted,
    InFlight,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for LoadStatus<T> {
    fn default() -> Self {
        LoadStatus::NotStarted
    }
}

impl<T> LoadStatus<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LoadStatus::InFlight)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }

    /// The loaded data, if the stage succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadStatus::Succeeded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if the stage failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One load stage: its status and the latest request issued for it.
#[derive(Debug)]
pub struct Stage<T> {
    status: LoadStatus<T>,
    latest: RequestId,
}

impl<T> Default for Stage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stage<T> {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::NotStarted,
            latest: 0,
        }
    }

    pub fn status(&self) -> &LoadStatus<T> {
        &self.status
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest
    }

    /// Issues a new request: moves to `InFlight` and returns its id.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.status = LoadStatus::InFlight;
        self.latest
    }

    /// Applies a response. Returns `false` (and changes nothing) if `request`
    /// has been superseded by a later `begin()`.
    pub fn resolve(&mut self, request: RequestId, result: Result<T, CatalogError>) -> bool {
        if request != self.latest {
            debug!(
                "Discarding stale response (request={}, latest={})",
                request, self.latest
            );
            return false;
        }
        self.status = match result {
            Ok(data) => LoadStatus::Succeeded(data),
            Err(e) => LoadStatus::Failed(e.to_string()),
        };
        true
    }
}

/// A fetch the event loop must perform on behalf of the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch {
    Categories {
        request: RequestId,
    },
    Products {
        request: RequestId,
        category: Category,
    },
}

/// Performs `fetch` against `source` and packages the outcome as the
/// [`Action`] that feeds it back into `update()`.
pub async fn run_fetch(source: &dyn CatalogSource, fetch: Fetch) -> Action {
    match fetch {
        Fetch::Categories { request } => {
            info!("Loading categories (request={})", request);
            let result = source.fetch_categories().await;
            Action::CategoriesLoaded { request, result }
        }
        Fetch::Products { request, category } => {
            info!("Loading products for '{}' (request={})", category, request);
            let result = source.fetch_products_by_category(&category).await;
            Action::ProductsLoaded {
                request,
                category,
                result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeCatalog, product};

    #[test]
    fn test_stage_starts_not_started() {
        let stage: Stage<Vec<String>> = Stage::new();
        assert_eq!(stage.status(), &LoadStatus::NotStarted);
        assert_eq!(stage.latest_request(), 0);
    }

    #[test]
    fn test_begin_moves_to_in_flight_with_increasing_ids() {
        let mut stage: Stage<Vec<String>> = Stage::new();
        assert_eq!(stage.begin(), 1);
        assert!(stage.status().is_in_flight());
        assert_eq!(stage.begin(), 2);
        assert!(stage.status().is_in_flight());
    }

    #[test]
    fn test_resolve_success_and_failure_clear_in_flight() {
        let mut stage: Stage<Vec<String>> = Stage::new();
        let id = stage.begin();
        assert!(stage.resolve(id, Ok(vec!["a".into()])));
        assert_eq!(stage.status().data(), Some(&vec!["a".to_string()]));

        let id = stage.begin();
        assert!(stage.resolve(id, Err(CatalogError::HttpStatus(404))));
        assert_eq!(stage.status().error(), Some("HTTP error! Status: 404"));
        assert!(!stage.status().is_in_flight());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut stage: Stage<Vec<String>> = Stage::new();
        let first = stage.begin();
        let second = stage.begin();

        // Second resolves first, then the older one arrives late
        assert!(stage.resolve(second, Ok(vec!["new".into()])));
        assert!(!stage.resolve(first, Ok(vec!["old".into()])));
        assert_eq!(stage.status().data(), Some(&vec!["new".to_string()]));
    }

    #[test]
    fn test_stale_failure_does_not_clobber_in_flight() {
        let mut stage: Stage<Vec<String>> = Stage::new();
        let first = stage.begin();
        let _second = stage.begin();
        assert!(!stage.resolve(first, Err(CatalogError::Transport("boom".into()))));
        assert!(stage.status().is_in_flight());
    }

    #[test]
    fn test_run_fetch_categories() {
        let catalog = FakeCatalog::with_categories(&["smartphones", "laptops"]);
        let action = tokio_test::block_on(run_fetch(&catalog, Fetch::Categories { request: 3 }));
        match action {
            Action::CategoriesLoaded { request, result } => {
                assert_eq!(request, 3);
                assert_eq!(result.unwrap(), vec!["smartphones", "laptops"]);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_run_fetch_products_passes_category() {
        let catalog = FakeCatalog::with_categories(&["laptops"])
            .products(vec![product(1, "MacBook Pro")]);
        let fetch = Fetch::Products {
            request: 1,
            category: "laptops".into(),
        };
        let action = tokio_test::block_on(run_fetch(&catalog, fetch));
        match action {
            Action::ProductsLoaded {
                request,
                category,
                result,
            } => {
                assert_eq!(request, 1);
                assert_eq!(category, "laptops");
                assert_eq!(result.unwrap()[0].title, "MacBook Pro");
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(catalog.product_calls(), vec!["laptops"]);
    }
}

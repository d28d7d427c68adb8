//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{CatalogError, CatalogSource, Category, Product};

/// In-memory catalog that records product requests.
pub struct FakeCatalog {
    categories: Result<Vec<Category>, CatalogError>,
    products: Result<Vec<Product>, CatalogError>,
    product_calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_categories(labels: &[&str]) -> Self {
        Self {
            categories: Ok(labels.iter().map(|s| s.to_string()).collect()),
            products: Ok(Vec::new()),
            product_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn products(mut self, products: Vec<Product>) -> Self {
        self.products = Ok(products);
        self
    }

    pub fn product_calls(&self) -> Vec<String> {
        self.product_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.categories.clone()
    }

    async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.product_calls.lock().unwrap().push(category.to_string());
        self.products.clone()
    }
}

/// Creates a fresh App.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new()
}

/// A minimal product with the given id and title.
pub fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        brand: "Acme".to_string(),
        category: "test".to_string(),
        price: 10.0,
        discount_percentage: 0.0,
        rating: 4.5,
        stock: 3,
        thumbnail: String::new(),
        images: Vec::new(),
    }
}

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{Category, Product, parse_categories, parse_products};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Failures surfaced by the catalog client.
///
/// `Display` is the text shown to the user: transport and parse failures
/// carry the underlying message verbatim, status failures embed the code.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Network-level failure (DNS, connection refused, body read).
    Transport(String),
    /// The catalog answered with a non-2xx status.
    HttpStatus(u16),
    /// The body could not be decoded.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(msg) => write!(f, "{msg}"),
            CatalogError::HttpStatus(status) => write!(f, "HTTP error! Status: {status}"),
            CatalogError::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only access to the product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Lists all categories in API order.
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Lists the products of one category.
    async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog client speaking the dummyjson products API over HTTP.
///
/// Every call is one GET: no caching, no retries.
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and returns the body text of a successful response.
    async fn get_body(&self, url: &str) -> Result<String, CatalogError> {
        info!("Catalog request: GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Catalog response status: {}", status);

        if !status.is_success() {
            warn!("Catalog error status {} for {}", status.as_u16(), url);
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))
    }
}

impl Default for HttpCatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let url = format!("{}/products/categories", self.base_url);
        let body = self.get_body(&url).await?;
        let categories = parse_categories(&body).map_err(|e| {
            warn!("Failed to decode categories: {}", e);
            CatalogError::Parse(e.to_string())
        })?;
        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products/category/{}", self.base_url, category);
        let body = self.get_body(&url).await?;
        let products = parse_products(&body).map_err(|e| {
            warn!("Failed to decode products for '{}': {}", category, e);
            CatalogError::Parse(e.to_string())
        })?;
        info!("Fetched {} products for '{}'", products.len(), category);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            CatalogError::HttpStatus(500).to_string(),
            "HTTP error! Status: 500"
        );
    }

    #[test]
    fn test_transport_and_parse_messages_are_verbatim() {
        assert_eq!(
            CatalogError::Transport("connection refused".into()).to_string(),
            "connection refused"
        );
        assert_eq!(
            CatalogError::Parse("expected value at line 1 column 1".into()).to_string(),
            "expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpCatalogClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(HttpCatalogClient::default().base_url(), DEFAULT_BASE_URL);
    }
}

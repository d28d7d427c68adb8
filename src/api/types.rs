use serde::{Deserialize, Serialize};

/// A category label as used in the products-by-category URL.
pub type Category = String;

/// A single product as returned by the catalog.
///
/// Only `id` is required. Catalog entries regularly omit fields like
/// `brand` or `title`, and a missing field should not fail the whole page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Body of `GET /products/category/{category}`.
#[derive(Deserialize, Debug, Default)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// One entry of `GET /products/categories`.
///
/// Older catalog versions return bare strings; newer ones return objects
/// with a `slug` that is what the products endpoint expects.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum CategoryEntry {
    Label(String),
    Object { slug: String },
}

impl From<CategoryEntry> for Category {
    fn from(entry: CategoryEntry) -> Self {
        match entry {
            CategoryEntry::Label(label) => label,
            CategoryEntry::Object { slug } => slug,
        }
    }
}

/// Decodes a categories payload, preserving API order.
pub fn parse_categories(body: &str) -> Result<Vec<Category>, serde_json::Error> {
    let entries: Vec<CategoryEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().map(Category::from).collect())
}

/// Decodes a products payload. A missing or null `products` field yields an
/// empty list.
pub fn parse_products(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    let page: ProductPage = serde_json::from_str(body)?;
    Ok(page.products.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_plain_labels() {
        let categories = parse_categories(r#"["smartphones","laptops"]"#).unwrap();
        assert_eq!(categories, vec!["smartphones", "laptops"]);
    }

    #[test]
    fn test_parse_categories_object_form_uses_slug() {
        let body = r#"[
            {"slug":"beauty","name":"Beauty","url":"https://dummyjson.com/products/category/beauty"},
            {"slug":"home-decoration","name":"Home Decoration","url":"x"}
        ]"#;
        let categories = parse_categories(body).unwrap();
        assert_eq!(categories, vec!["beauty", "home-decoration"]);
    }

    #[test]
    fn test_parse_categories_rejects_object_payload() {
        assert!(parse_categories(r#"{"categories":[]}"#).is_err());
    }

    #[test]
    fn test_parse_products_full_entry() {
        let body = r#"{
            "products": [{
                "id": 1,
                "title": "iPhone 9",
                "description": "An apple mobile which is nothing like apple",
                "price": 549,
                "discountPercentage": 12.96,
                "rating": 4.69,
                "stock": 94,
                "brand": "Apple",
                "category": "smartphones",
                "thumbnail": "https://i.dummyjson.com/data/products/1/thumbnail.jpg",
                "images": ["https://i.dummyjson.com/data/products/1/1.jpg"]
            }],
            "total": 1, "skip": 0, "limit": 1
        }"#;
        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.id, 1);
        assert_eq!(p.brand, "Apple");
        assert_eq!(p.price, 549.0);
        assert_eq!(p.discount_percentage, 12.96);
        assert_eq!(p.stock, 94);
        assert_eq!(p.images.len(), 1);
    }

    #[test]
    fn test_parse_products_missing_field_is_empty() {
        let products = parse_products(r#"{"total":0}"#).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_products_null_field_is_empty() {
        let products = parse_products(r#"{"products":null,"total":0}"#).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_products_entry_without_title_keeps_page() {
        let body = r#"{"products":[{"id":1},{"id":2,"title":"Lamp"}]}"#;
        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "");
        assert_eq!(products[1].title, "Lamp");
    }

    #[test]
    fn test_parse_products_tolerates_missing_brand() {
        let products = parse_products(r#"{"products":[{"id":7,"title":"Bowl"}]}"#).unwrap();
        assert_eq!(products[0].brand, "");
        assert!(products[0].images.is_empty());
    }

    #[test]
    fn test_parse_products_malformed_json() {
        assert!(parse_products("{not json").is_err());
    }
}

//! Catalog products as consumed by the app.

use std::path::{Path, PathBuf};

use crate::document::ProductRecord;
use crate::types::{Price, ProductId};

/// A resolved reference to a local product image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(PathBuf);

impl ImageHandle {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// A product in the catalog.
///
/// Unlike [`ProductRecord`], the local image name has already been resolved
/// and an empty remote URL is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<ImageHandle>,
    pub image_url: Option<String>,
}

impl Product {
    /// A product without images.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: None,
            image_url: None,
        }
    }

    /// Convert a stored record, resolving its image name with `resolve`.
    ///
    /// A missing name or a failed resolution both yield `image: None`.
    pub fn from_record(
        record: ProductRecord,
        resolve: impl FnOnce(&str) -> Option<ImageHandle>,
    ) -> Self {
        let image = record
            .image_res
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .and_then(resolve);
        let image_url = record.image_url.filter(|url| !url.trim().is_empty());

        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            image,
            image_url,
        }
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image_res: Option<&str>, image_url: Option<&str>) -> ProductRecord {
        ProductRecord {
            id: ProductId::new("1"),
            name: "Arroz 1kg".to_string(),
            price: Price::new("1.250,00"),
            image_res: image_res.map(str::to_string),
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn test_from_record_resolves_image() {
        let product = Product::from_record(record(Some("arroz"), None), |name| {
            Some(ImageHandle::new(format!("/img/{name}.png")))
        });
        assert_eq!(product.image, Some(ImageHandle::new("/img/arroz.png")));
    }

    #[test]
    fn test_from_record_unresolved_image_is_none() {
        let product = Product::from_record(record(Some("missing"), None), |_| None);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_from_record_blank_image_name_not_resolved() {
        let product = Product::from_record(record(Some("  "), Some("")), |_| {
            Some(ImageHandle::new("/should/not/happen"))
        });
        assert!(product.image.is_none());
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_matches() {
        let product = Product::new(ProductId::new("1"), "Arroz Largo Fino", Price::new("1"));
        assert!(product.matches("arroz"));
        assert!(product.matches("LARGO"));
        assert!(product.matches(""));
        assert!(!product.matches("leche"));
    }
}

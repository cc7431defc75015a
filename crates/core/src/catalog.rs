//! The fixed demo product catalog.
//!
//! Products are defined once at startup and never created, mutated, or
//! destroyed at runtime. Lookup order is stable, so the storefront page
//! always lists products the same way.

use crate::types::{CurrencyCode, Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        let usd = |cents| Price::from_cents(cents, CurrencyCode::USD);
        Self::new(vec![
            Product {
                id: ProductId::new(1),
                name: "Logo T-Shirt".to_string(),
                price: usd(1990),
            },
            Product {
                id: ProductId::new(2),
                name: "HTMX Mug".to_string(),
                price: usd(1250),
            },
            Product {
                id: ProductId::new(3),
                name: "Sticker Pack".to_string(),
                price: usd(300),
            },
            Product {
                id: ProductId::new(4),
                name: "Cozy Socks".to_string(),
                price: usd(990),
            },
        ])
    }

    /// All products, in stable catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether the catalog contains a product with this ID.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_has_four_products() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.products().len(), 4);
    }

    #[test]
    fn test_order_is_stable() {
        let catalog = Catalog::demo();
        let ids: Vec<i32> = catalog.products().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_get_known_product() {
        let catalog = Catalog::demo();
        let product = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(product.name, "HTMX Mug");
        assert_eq!(product.price.display(), "$12.50");
    }

    #[test]
    fn test_get_unknown_product_is_none() {
        let catalog = Catalog::demo();
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(!catalog.contains(ProductId::new(99)));
    }
}

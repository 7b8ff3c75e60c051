use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product (e.g. `"p1"`).
///
/// Serialized as a bare string, which is also the wishlist entry format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A product in the static catalog.
///
/// Prices are integers in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: u64,
    /// Image reference. Empty means the presentation layer draws a placeholder.
    pub image: &'static str,
}

/// Ordering applied by [`catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    /// Parses the sort selector values used by the product listing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

const CATALOG: [(&str, &str, u64); 6] = [
    ("p1", "Wireless Earbuds", 1299),
    ("p2", "Smart Watch", 3499),
    ("p3", "Bluetooth Speaker", 899),
    ("p4", "DSLR Camera", 25999),
    ("p5", "Gaming Mouse", 1499),
    ("p6", "Mechanical Keyboard", 4999),
];

/// Returns the fixed catalog in the requested order.
///
/// Sorting is stable, so products with equal prices keep catalog order.
pub fn catalog(sort: SortOrder) -> Vec<Product> {
    let mut products: Vec<Product> = CATALOG
        .iter()
        .map(|&(id, name, price)| Product {
            id: ProductId::new(id),
            name,
            price,
            image: "",
        })
        .collect();

    match sort {
        SortOrder::Default => {}
        SortOrder::PriceAsc => products.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    products
}

/// Looks up a single catalog product.
pub fn find_product(id: &ProductId) -> Option<Product> {
    catalog(SortOrder::Default).into_iter().find(|p| &p.id == id)
}

/// Resolves ids against the catalog, keeping their order and skipping unknown ones.
pub fn resolve_products(ids: &[ProductId]) -> Vec<Product> {
    ids.iter().filter_map(find_product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_products_skips_unknown_ids() {
        let ids = [ProductId::new("p3"), ProductId::new("ghost"), ProductId::new("p1")];
        let names: Vec<&str> = resolve_products(&ids).iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Bluetooth Speaker", "Wireless Earbuds"]);
    }

    #[test]
    fn test_catalog_has_six_products_in_order() {
        let ids: Vec<String> = catalog(SortOrder::Default)
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
    }

    #[test]
    fn test_catalog_sorts_by_price() {
        let asc: Vec<u64> = catalog(SortOrder::PriceAsc).iter().map(|p| p.price).collect();
        assert_eq!(asc, vec![899, 1299, 1499, 3499, 4999, 25999]);

        let desc = catalog(SortOrder::PriceDesc);
        assert_eq!(desc[0].name, "DSLR Camera");
        assert_eq!(desc[5].name, "Bluetooth Speaker");
    }

    #[test]
    fn test_sort_order_parses_selector_values() {
        assert_eq!("price-asc".parse::<SortOrder>(), Ok(SortOrder::PriceAsc));
        assert_eq!("price-desc".parse::<SortOrder>(), Ok(SortOrder::PriceDesc));
        assert_eq!("default".parse::<SortOrder>(), Ok(SortOrder::Default));
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_find_product() {
        let camera = find_product(&ProductId::new("p4")).unwrap();
        assert_eq!(camera.price, 25999);
        assert!(find_product(&ProductId::new("p99")).is_none());
    }
}

use crate::model::Product;
use serde::Serialize;
use std::collections::BTreeSet;

/// Canonical size order, smallest first.
pub const SIZE_ORDER: [&str; 8] = ["XS", "S", "M", "L", "XL", "XXL", "3XL", "4XL"];

/// The selectable values for each multi-select filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    /// Distinct brands, sorted.
    pub brands: Vec<String>,
    /// Sizes in [`SIZE_ORDER`], only those in stock.
    pub sizes: Vec<String>,
    /// Distinct conditions, sorted.
    pub conditions: Vec<String>,
}

/// Facets offered for `products`, which should already be gated by the release.
///
/// Sizes outside [`SIZE_ORDER`] are never offered.
pub fn facet_options(products: &[&Product]) -> FacetOptions {
    let brands: BTreeSet<&str> = products.iter().map(|p| p.brand.as_str()).collect();
    let conditions: BTreeSet<&str> = products.iter().map(|p| p.condition.as_str()).collect();
    let sizes = SIZE_ORDER
        .iter()
        .filter(|size| products.iter().any(|p| p.size == **size))
        .map(|size| size.to_string())
        .collect();

    FacetOptions {
        brands: brands.into_iter().map(String::from).collect(),
        sizes,
        conditions: conditions.into_iter().map(String::from).collect(),
    }
}

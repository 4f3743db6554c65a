use crate::catalog::FilterCriteria;
use crate::model::Product;

/// Products the shopper may see: everything except upcoming pieces before the drop goes
/// live. Catalog order is kept.
///
/// Every other derivation (facets, counts, filtering) starts from this list.
pub fn visible_catalog(products: &[Product], release_live: bool) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.is_visible(release_live))
        .collect()
}

/// Narrows `products` to those matching every criterion. Order is kept.
pub fn apply_filters<'a>(products: &[&'a Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    // Lowercased once; matched against each product's lowercased name and brand.
    let query = criteria.query.to_lowercase();
    products
        .iter()
        .copied()
        .filter(|product| matches_with(product, criteria, &query))
        .collect()
}

/// True if `product` passes every dimension of `criteria`.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_with(product, criteria, &criteria.query.to_lowercase())
}

fn matches_with(product: &Product, criteria: &FilterCriteria, query: &str) -> bool {
    criteria.status.admits(product.sold)
        && (criteria.brands.is_empty() || criteria.brands.contains(&product.brand))
        && (criteria.sizes.is_empty() || criteria.sizes.contains(&product.size))
        && (criteria.conditions.is_empty() || criteria.conditions.contains(&product.condition))
        && criteria.price.contains(product.price)
        && (query.is_empty()
            || product.name.to_lowercase().contains(query)
            || product.brand.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PriceBand, StatusFilter};

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, id, "Unbranded", "M", "Gently Used", price)
    }

    #[test]
    fn test_under_1000_band_keeps_only_the_cheap_item() {
        let products = vec![
            product("lace", 999),
            product("blouse", 1299),
            product("jacket", 1899),
        ];
        let visible = visible_catalog(&products, true);
        let criteria = FilterCriteria::default().with_price(PriceBand::Under1000);

        let result = apply_filters(&visible, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price, 999);
    }

    #[test]
    fn test_upcoming_item_hidden_until_live() {
        let products = vec![product("a", 100), product("x", 100).in_next_drop()];

        let before: Vec<_> = visible_catalog(&products, false)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let after: Vec<_> = visible_catalog(&products, true)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(before, vec!["a"]);
        assert_eq!(after, vec!["a", "x"]);
    }

    #[test]
    fn test_sold_out_filter_returns_only_sold() {
        let products = vec![
            product("a", 100).sold_out(),
            product("b", 100),
            product("c", 100).sold_out(),
            product("d", 100),
            product("e", 100),
        ];
        let visible = visible_catalog(&products, false);
        let criteria = FilterCriteria::default().with_status(StatusFilter::SoldOut);

        let result = apply_filters(&visible, &criteria);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.sold));
    }

    #[test]
    fn test_default_status_hides_sold() {
        let products = vec![product("a", 100).sold_out(), product("b", 100)];
        let visible = visible_catalog(&products, false);

        let result = apply_filters(&visible, &FilterCriteria::default());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "b");
    }

    #[test]
    fn test_query_matches_name_or_brand_case_insensitively() {
        let jacket = Product::new("j", "Chic Denim Jacket", "Levi's", "M", "Gently Used", 1899);
        let tunic = Product::new("t", "Floral Tunic Top", "Zara", "XS", "New with Tags", 1150);
        let products = vec![jacket, tunic];
        let visible = visible_catalog(&products, false);

        let by_name = apply_filters(&visible, &FilterCriteria::default().with_query("DENIM"));
        let by_brand = apply_filters(&visible, &FilterCriteria::default().with_query("zar"));

        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id.as_str(), "j");
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand[0].id.as_str(), "t");
    }

    #[test]
    fn test_or_within_dimension_and_across() {
        let products = vec![
            Product::new("a", "A", "Zara", "S", "Vintage", 500),
            Product::new("b", "B", "Zara", "M", "Vintage", 500),
            Product::new("c", "C", "Levi's", "S", "Vintage", 500),
            Product::new("d", "D", "Mango", "S", "Vintage", 500),
        ];
        let visible = visible_catalog(&products, false);
        let mut criteria = FilterCriteria::default();
        criteria.toggle_brand("Zara");
        criteria.toggle_brand("Levi's");
        criteria.toggle_size("S");

        let ids: Vec<_> = apply_filters(&visible, &criteria)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_matches_agrees_with_apply_filters() {
        let products = vec![product("a", 1200), product("b", 1600).sold_out()];
        let criteria = FilterCriteria::default().with_price(PriceBand::From1000To1500);

        assert!(matches(&products[0], &criteria));
        assert!(!matches(&products[1], &criteria));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display};

/// Availability filter on the shop page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    /// Sold-out pieces are hidden until the shopper asks for them.
    #[default]
    Available,
    SoldOut,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Available, Self::SoldOut];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Available => "Available",
            Self::SoldOut => "Sold Out",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Available => "available",
            Self::SoldOut => "sold-out",
        }
    }

    /// Parses a display label (`Sold Out`) or slug (`sold-out`), ignoring case.
    /// Anything else means no constraint.
    pub fn from_label_lossy(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| {
                label.eq_ignore_ascii_case(status.label())
                    || label.eq_ignore_ascii_case(status.slug())
            })
            .unwrap_or(Self::All)
    }

    pub fn admits(self, sold: bool) -> bool {
        match self {
            Self::All => true,
            Self::Available => !sold,
            Self::SoldOut => sold,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed price bands offered in the filter drawer. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    #[default]
    All,
    Under1000,
    From1000To1500,
    Over1500,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        Self::All,
        Self::Under1000,
        Self::From1000To1500,
        Self::Over1500,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Under1000 => "Under ₹1000",
            Self::From1000To1500 => "₹1000 - ₹1500",
            Self::Over1500 => "Over ₹1500",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Under1000 => "under-1000",
            Self::From1000To1500 => "1000-1500",
            Self::Over1500 => "over-1500",
        }
    }

    /// `(min, max)`; `max` is `None` for open-ended bands.
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::All => (0, None),
            Self::Under1000 => (0, Some(999)),
            Self::From1000To1500 => (1000, Some(1500)),
            Self::Over1500 => (1501, None),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.is_none_or(|max| price <= max)
    }

    /// Parses a display label (`Under ₹1000`) or slug (`under-1000`), ignoring case.
    /// Unknown bands are treated as unbounded.
    pub fn from_label_lossy(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| {
                label.eq_ignore_ascii_case(band.label()) || label.eq_ignore_ascii_case(band.slug())
            })
            .unwrap_or(Self::All)
    }
}

impl Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the shopper has chosen in the filter drawer.
///
/// An empty set places no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub status: StatusFilter,
    pub brands: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub conditions: BTreeSet<String>,
    pub price: PriceBand,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_price(mut self, price: PriceBand) -> Self {
        self.price = price;
        self
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    pub fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.sizes, size);
    }

    pub fn toggle_condition(&mut self, condition: &str) {
        toggle(&mut self.conditions, condition);
    }

    /// Back to the defaults: no query, available items only, every price.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Number shown on the filter badge.
    ///
    /// `Available` is the default status, so only a different status counts.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.query.is_empty())
            + usize::from(self.status != StatusFilter::Available)
            + usize::from(self.price != PriceBand::All)
            + self.brands.len()
            + self.sizes.len()
            + self.conditions.len()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_bands_are_inclusive_and_disjoint() {
        assert!(PriceBand::Under1000.contains(999));
        assert!(!PriceBand::Under1000.contains(1000));
        assert!(PriceBand::From1000To1500.contains(1000));
        assert!(PriceBand::From1000To1500.contains(1500));
        assert!(!PriceBand::Over1500.contains(1500));
        assert!(PriceBand::Over1500.contains(1501));
        assert!(PriceBand::All.contains(u64::MAX));

        for price in [0, 999, 1000, 1500, 1501, 25_000] {
            let hits = PriceBand::ALL[1..]
                .iter()
                .filter(|band| band.contains(price))
                .count();
            assert_eq!(hits, 1, "price {price} should fall in exactly one band");
        }
    }

    #[test]
    fn test_unknown_labels_mean_no_constraint() {
        let band = PriceBand::from_label_lossy;
        assert_eq!(band("Under ₹1000"), PriceBand::Under1000);
        assert_eq!(band("over-1500"), PriceBand::Over1500);
        assert_eq!(band("cheap"), PriceBand::All);

        let status = StatusFilter::from_label_lossy;
        assert_eq!(status("Sold Out"), StatusFilter::SoldOut);
        assert_eq!(status("AVAILABLE"), StatusFilter::Available);
        assert_eq!(status("reserved"), StatusFilter::All);
    }

    #[test]
    fn test_default_criteria_hide_sold_items() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.status, StatusFilter::Available);
        assert_eq!(criteria.price, PriceBand::All);
        assert_eq!(criteria.active_filter_count(), 0);
    }

    #[test]
    fn test_active_filter_count() {
        let mut criteria = FilterCriteria::default()
            .with_query("denim")
            .with_status(StatusFilter::All)
            .with_price(PriceBand::Over1500);
        criteria.toggle_brand("Levi's");
        criteria.toggle_brand("Zara");
        criteria.toggle_size("M");
        criteria.toggle_condition("Vintage");

        assert_eq!(criteria.active_filter_count(), 7);

        criteria.toggle_brand("Zara");
        assert_eq!(criteria.active_filter_count(), 6);

        criteria.clear_all();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_whitespace_query_counts_as_active() {
        let criteria = FilterCriteria::default().with_query(" ");
        assert_eq!(criteria.active_filter_count(), 1);
    }
}

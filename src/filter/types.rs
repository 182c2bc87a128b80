use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Listing;

/// Lower bound of the price slider.
pub const MIN_PRICE: i64 = 100;
/// Upper bound of the price slider.
pub const MAX_PRICE: i64 = 10_000;

/// Inclusive price range, always within `[MIN_PRICE, MAX_PRICE]` with
/// `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: i64,
    pub high: i64,
}

impl PriceRange {
    /// Build a range from raw slider values.
    ///
    /// Out-of-bounds ends are clamped into `[MIN_PRICE, MAX_PRICE]` and an
    /// inverted pair is swapped, so any two inputs yield a valid range.
    /// A two-ended slider drag can momentarily report both.
    pub fn clamped(low: i64, high: i64) -> Self {
        let low = low.clamp(MIN_PRICE, MAX_PRICE);
        let high = high.clamp(MIN_PRICE, MAX_PRICE);
        if low <= high {
            Self { low, high }
        } else {
            Self { low: high, high: low }
        }
    }

    pub fn contains(&self, price: i64) -> bool {
        self.low <= price && price <= self.high
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            low: MIN_PRICE,
            high: MAX_PRICE,
        }
    }
}

/// The user-chosen filter constraints for the listing sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected city, `None` meaning "all cities".
    pub city: Option<String>,
    /// Selected property types; an empty set lets every type pass.
    pub property_types: HashSet<String>,
    /// Price bounds applied when `any_price` is off.
    pub price_range: PriceRange,
    /// When true, price filtering is suspended entirely.
    pub any_price: bool,
}

impl FilterSelection {
    /// Check whether a listing passes every active filter.
    ///
    /// Dimensions combine with AND semantics. City comparison is
    /// case-insensitive while property-type membership is exact; a listing
    /// missing a filtered field never matches on that dimension.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(city) = &self.city {
            match &listing.city_name {
                Some(name) if city_eq(name, city) => {}
                _ => return false,
            }
        }

        if !self.property_types.is_empty() {
            match &listing.property_type {
                Some(kind) if self.property_types.contains(kind) => {}
                _ => return false,
            }
        }

        self.any_price || self.price_range.contains(listing.price)
    }
}

/// Case-insensitive city comparison.
pub(crate) fn city_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(city: &str, kind: &str, price: i64) -> Listing {
        Listing {
            id: format!("{}-{}", city, kind),
            city_name: Some(city.to_string()),
            property_type: Some(kind.to_string()),
            price,
            title: String::new(),
            description: String::new(),
            images: vec![],
            url: String::new(),
            fetched_at: chrono::Utc::now(),
            raw_data: serde_json::Value::Null,
        }
    }

    #[test]
    fn clamping_pulls_both_ends_into_bounds() {
        assert_eq!(
            PriceRange::clamped(50, 20_000),
            PriceRange {
                low: MIN_PRICE,
                high: MAX_PRICE
            }
        );
    }

    #[test]
    fn inverted_range_is_swapped() {
        assert_eq!(
            PriceRange::clamped(5_000, 200),
            PriceRange {
                low: 200,
                high: 5_000
            }
        );
    }

    #[test]
    fn default_selection_matches_anything_in_price_bounds() {
        let selection = FilterSelection::default();
        assert!(selection.matches(&listing("Cairo", "Villa", MIN_PRICE)));
        assert!(selection.matches(&listing("Giza", "Apartment", MAX_PRICE)));
    }

    #[test]
    fn city_match_is_case_insensitive() {
        let selection = FilterSelection {
            city: Some("Cairo".to_string()),
            ..Default::default()
        };
        assert!(selection.matches(&listing("cairo", "Villa", 500)));
        assert!(!selection.matches(&listing("Giza", "Villa", 500)));
    }

    #[test]
    fn type_match_is_exact() {
        let selection = FilterSelection {
            property_types: ["Villa".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert!(selection.matches(&listing("Cairo", "Villa", 500)));
        assert!(!selection.matches(&listing("Cairo", "villa", 500)));
    }

    #[test]
    fn missing_fields_never_match_an_active_filter() {
        let mut bare = listing("Cairo", "Villa", 500);
        bare.city_name = None;
        bare.property_type = None;

        let by_city = FilterSelection {
            city: Some("Cairo".to_string()),
            ..Default::default()
        };
        assert!(!by_city.matches(&bare));

        let by_type = FilterSelection {
            property_types: ["Villa".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert!(!by_type.matches(&bare));

        // With no city/type filter active the bare record still passes.
        assert!(FilterSelection::default().matches(&bare));
    }

    #[test]
    fn any_price_bypasses_the_range() {
        let selection = FilterSelection {
            price_range: PriceRange::clamped(100, 1_000),
            any_price: true,
            ..Default::default()
        };
        assert!(selection.matches(&listing("Giza", "Villa", 9_000)));
    }
}

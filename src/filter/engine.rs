use std::collections::HashSet;

use tracing::debug;

use crate::filter::types::{city_eq, FilterSelection, PriceRange};
use crate::models::Listing;

/// The listing filter engine backing the sidebar.
///
/// Owns the current listing collection and the user's `FilterSelection`,
/// and keeps three derived values in sync with them: the distinct cities,
/// the distinct property types available under the selected city, and the
/// filtered listing collection. Every mutator recomputes the derived
/// values before returning, so reads never observe stale state.
pub struct FilterEngine {
    listings: Vec<Listing>,
    selection: FilterSelection,
    available_cities: Vec<String>,
    available_property_types: Vec<String>,
    filtered: Vec<Listing>,
}

impl FilterEngine {
    /// Create an engine over a listing collection with default filters.
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut engine = Self {
            listings,
            selection: FilterSelection::default(),
            available_cities: Vec::new(),
            available_property_types: Vec::new(),
            filtered: Vec::new(),
        };
        engine.recompute();
        engine
    }

    /// Select a city, or clear the city filter with `None` or `""`.
    ///
    /// Always clears the selected property types: a type chosen under the
    /// previous city may not exist under the new one. An unknown city is
    /// accepted and simply yields empty derived sets.
    pub fn set_city(&mut self, city: Option<&str>) {
        self.selection.city = match city {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => None,
        };
        self.selection.property_types.clear();
        self.recompute();
    }

    /// Add the property type to the selection, or remove it if present.
    pub fn toggle_type(&mut self, property_type: &str) {
        if !self.selection.property_types.remove(property_type) {
            self.selection
                .property_types
                .insert(property_type.to_string());
        }
        self.recompute();
    }

    /// Set the price bounds, clamping out-of-range slider values.
    pub fn set_price_range(&mut self, low: i64, high: i64) {
        self.selection.price_range = PriceRange::clamped(low, high);
        self.recompute();
    }

    /// Enable or disable the "any price" bypass.
    pub fn set_any_price(&mut self, enabled: bool) {
        self.selection.any_price = enabled;
        self.recompute();
    }

    /// Replace the source collection, e.g. after a new page of listings
    /// arrives. The user's selections are preserved.
    pub fn set_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
        self.recompute();
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Distinct cities across the full collection, in first-seen order.
    pub fn available_cities(&self) -> &[String] {
        &self.available_cities
    }

    /// Distinct property types among listings in the selected city, or
    /// across the full collection when no city is selected.
    pub fn available_property_types(&self) -> &[String] {
        &self.available_property_types
    }

    /// The listings passing every active filter.
    pub fn filtered_listings(&self) -> &[Listing] {
        &self.filtered
    }

    /// Recompute all derived state from the current inputs.
    fn recompute(&mut self) {
        self.available_cities = distinct(
            self.listings
                .iter()
                .filter_map(|listing| listing.city_name.as_deref()),
        );

        self.available_property_types = distinct(
            self.listings
                .iter()
                .filter(|listing| match &self.selection.city {
                    Some(city) => listing
                        .city_name
                        .as_deref()
                        .is_some_and(|name| city_eq(name, city)),
                    None => true,
                })
                .filter_map(|listing| listing.property_type.as_deref()),
        );

        self.filtered = self
            .listings
            .iter()
            .filter(|listing| self.selection.matches(listing))
            .cloned()
            .collect();

        debug!(
            "Recomputed filters: {} of {} listings match, {} cities, {} types offered",
            self.filtered.len(),
            self.listings.len(),
            self.available_cities.len(),
            self.available_property_types.len()
        );
    }
}

/// Distinct values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

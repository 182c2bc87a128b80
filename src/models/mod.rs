use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single rental listing as delivered by a listing source.
///
/// Only `city_name`, `property_type` and `price` are inspected by the
/// filter engine; the remaining fields ride along for presentation.
/// `city_name` and `property_type` are optional: a record missing one of
/// them is excluded from the corresponding distinct-value set and never
/// matches a filter on that field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    /// Nightly price in whole currency units.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub raw_data: serde_json::Value,
}

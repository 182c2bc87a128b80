use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::models::Listing;

/// Bundled sample listings for running the demo without a backend.
pub fn sample_listings() -> Vec<Listing> {
    info!("📋 Using bundled sample listings");

    vec![
        Listing {
            id: "sample_1".to_string(),
            city_name: Some("Cairo".to_string()),
            property_type: Some("Villa".to_string()),
            price: 500,
            title: "Garden villa in Maadi".to_string(),
            description: "Three bedrooms, private garden, close to the Nile corniche.".to_string(),
            images: vec!["/listings/sample_1/cover.jpg".to_string()],
            url: "https://example.com/listings/sample_1".to_string(),
            fetched_at: Utc::now(),
            raw_data: json!({ "sample": true, "area": "Maadi" }),
        },
        Listing {
            id: "sample_2".to_string(),
            city_name: Some("cairo".to_string()),
            property_type: Some("Apartment".to_string()),
            price: 5_000,
            title: "Penthouse in Zamalek".to_string(),
            description: "Top-floor apartment overlooking the river.".to_string(),
            images: vec!["/listings/sample_2/cover.jpg".to_string()],
            url: "https://example.com/listings/sample_2".to_string(),
            fetched_at: Utc::now(),
            raw_data: json!({ "sample": true, "area": "Zamalek" }),
        },
        Listing {
            id: "sample_3".to_string(),
            city_name: Some("Giza".to_string()),
            property_type: Some("Villa".to_string()),
            price: 9_000,
            title: "Villa with pyramid view".to_string(),
            description: "Large villa near the plateau, pool and roof terrace.".to_string(),
            images: vec!["/listings/sample_3/cover.jpg".to_string()],
            url: "https://example.com/listings/sample_3".to_string(),
            fetched_at: Utc::now(),
            raw_data: json!({ "sample": true, "area": "Haram" }),
        },
        Listing {
            id: "sample_4".to_string(),
            city_name: Some("Giza".to_string()),
            property_type: Some("Apartment".to_string()),
            price: 800,
            title: "Two-bedroom flat in Dokki".to_string(),
            description: "Quiet street, balcony, five minutes from the metro.".to_string(),
            images: vec![],
            url: "https://example.com/listings/sample_4".to_string(),
            fetched_at: Utc::now(),
            raw_data: json!({ "sample": true, "area": "Dokki" }),
        },
        Listing {
            id: "sample_5".to_string(),
            city_name: Some("Alexandria".to_string()),
            property_type: Some("Chalet".to_string()),
            price: 1_200,
            title: "Seafront chalet in Montaza".to_string(),
            description: "Steps from the beach, sleeps four.".to_string(),
            images: vec!["/listings/sample_5/cover.jpg".to_string()],
            url: "https://example.com/listings/sample_5".to_string(),
            fetched_at: Utc::now(),
            raw_data: json!({ "sample": true, "area": "Montaza" }),
        },
        Listing {
            id: "sample_6".to_string(),
            city_name: Some("Alexandria".to_string()),
            property_type: Some("Studio".to_string()),
            price: 300,
            title: "Studio by the library".to_string(),
            description: "Compact studio, walking distance to the Bibliotheca.".to_string(),
            images: vec![],
            url: "https://example.com/listings/sample_6".to_string(),
            fetched_at: Utc::now(),
            raw_data: json!({ "sample": true, "area": "Shatby" }),
        },
    ]
}

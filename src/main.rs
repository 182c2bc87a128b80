mod clock;
mod filter;
mod models;
mod session;
mod sources;

use clock::DateTicker;
use filter::FilterEngine;
use session::{HttpSession, SessionService};
use sources::{FileListingSource, HttpListingSource, ListingSource};
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Rental Filter - Listing Sidebar Demo");
    info!("========================================");
    info!("");

    // Live clock shown in the sidebar greeting
    let ticker = DateTicker::start();
    info!("Today is {}", ticker.current());

    // Load listings from a JSON file if one is given, from the backend if
    // RENTAL_LISTINGS_URL is set, otherwise use the bundled samples
    let listings = if let Some(path) = std::env::args().nth(1) {
        FileListingSource::new(path).fetch().await?
    } else if let Ok(url) = std::env::var("RENTAL_LISTINGS_URL") {
        HttpListingSource::new(url)?.fetch().await?
    } else {
        sources::sample_listings()
    };

    info!("Loaded {} listings", listings.len());

    let mut engine = FilterEngine::new(listings);

    info!("Available cities: {}", engine.available_cities().join(", "));

    // Narrow to the first city the way a user would from the dropdown
    let city = engine.available_cities().first().cloned();
    if let Some(city) = city {
        engine.set_city(Some(&city));
        info!(
            "Selected {}: {} listings, property types: {}",
            city,
            engine.filtered_listings().len(),
            engine.available_property_types().join(", ")
        );

        // Tick the first property type checkbox
        if let Some(kind) = engine.available_property_types().first().cloned() {
            engine.toggle_type(&kind);
            info!("Selected type {}", kind);
        }
    }

    info!("\n✅ {} listings match the filters\n", engine.filtered_listings().len());

    for (i, listing) in engine.filtered_listings().iter().enumerate() {
        println!("{}. {} (${})", i + 1, listing.title, listing.price);
        println!(
            "   {} · {}",
            listing.city_name.as_deref().unwrap_or("unknown city"),
            listing.property_type.as_deref().unwrap_or("unknown type"),
        );
        println!("   ID: {}", listing.id);
        println!("   URL: {}", listing.url);
        println!();
    }

    // Save the filtered collection
    let json = serde_json::to_string_pretty(engine.filtered_listings())?;
    tokio::fs::write("filtered_listings.json", json).await?;
    info!("💾 Saved filtered listings to filtered_listings.json");

    // Simulate the logout button when a backend session is configured
    if let (Ok(url), Ok(token)) = (
        std::env::var("RENTAL_LOGOUT_URL"),
        std::env::var("RENTAL_TOKEN"),
    ) {
        let session = HttpSession::new(url, token)?;
        session.logout().await?;
    }

    // Stops the clock task before exit
    drop(ticker);

    Ok(())
}

pub mod engine;
pub mod types;

pub use engine::FilterEngine;
pub use types::{FilterSelection, PriceRange, MAX_PRICE, MIN_PRICE};

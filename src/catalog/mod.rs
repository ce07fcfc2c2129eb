//! Catalog boundary: the pre-built card list fed into a new game.
//!
//! - `FeatureCard`: the feature-as-fantasy-card record schema
//! - `load_catalog` / `load_catalog_file`: JSON parsing into records
//! - `parse_catalog`: the same for any deserializable payload

pub mod loader;
pub mod record;

pub use loader::{load_catalog, load_catalog_file, parse_catalog};
pub use record::FeatureCard;

//! Catalog loading from the pre-built JSON card list.
//!
//! The catalog is a JSON array of records. Any read or parse failure is a
//! `CatalogLoad` error and no game can be started from it.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::record::FeatureCard;
use crate::core::RankError;

/// Parse a JSON array of records of any payload type.
pub fn parse_catalog<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, RankError> {
    let records: Vec<T> = serde_json::from_str(json)?;
    debug!(target: "catalog.load", cards = records.len(), "catalog parsed");
    Ok(records)
}

/// Parse a JSON feature-card catalog.
pub fn load_catalog(json: &str) -> Result<Vec<FeatureCard>, RankError> {
    parse_catalog(json)
}

/// Read and parse a feature-card catalog file.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<FeatureCard>, RankError> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path).map_err(|e| {
        warn!(target: "catalog.load", path = %path.display(), error = %e, "catalog read failed");
        RankError::CatalogLoad(format!("{}: {e}", path.display()))
    })?;
    load_catalog(&body)
}

//! Boundary adapter for an external trip generator.
//!
//! The generator answers with an envelope `{"result": "<json text>"}` whose
//! inner text must be `{"trips": [ <TripTemplate>, ... ]}`. Only that shape is
//! accepted; anything else is reported as a [`GeneratorError`]. Individual trips
//! that fail to decode are dropped like any other malformed catalog entry.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::catalog::catalog::{Catalog, CatalogError};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Unexpected generator envelope: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("Generator returned an empty result")]
    EmptyResult,
    #[error("Unexpected generator payload: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    result: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TripsPayload {
    trips: Vec<Value>,
}

/// Parse a raw generator reply body into a catalog.
pub fn parse_reply(body: &str) -> Result<Catalog, GeneratorError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(GeneratorError::Envelope)?;
    parse_payload(&envelope.result)
}

/// Parse the inner payload text (the envelope's `result`).
pub fn parse_payload(result: &str) -> Result<Catalog, GeneratorError> {
    let trimmed = result.trim();
    if trimmed.is_empty() {
        return Err(GeneratorError::EmptyResult);
    }

    let payload: TripsPayload = serde_json::from_str(trimmed).map_err(GeneratorError::Payload)?;
    debug!(trips = payload.trips.len(), "generator payload decoded");

    Ok(Catalog::from_values(payload.trips)?)
}

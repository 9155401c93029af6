//! Response transformation seam.
//!
//! Providers answer with JSON arrays of place objects. The transformer
//! trait keeps that decoding replaceable: hosts with richer result types
//! can substitute their own implementation at construction time.

use serde::Deserialize;

use super::types::{GeocoderError, Place};

/// Trait for turning a raw provider response body into place results.
pub trait ResponseTransformer: Send + Sync {
    /// Transforms a raw response body into a normalized list of places.
    fn transform(&self, body: &[u8]) -> Result<Vec<Place>, GeocoderError>;
}

/// Default transformer for the JSON shape shared by Nominatim-compatible
/// providers.
///
/// Accepts both the array form (forward geocoding) and the single-object
/// form (reverse geocoding). Fields beyond the place identifier and
/// display name are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseTransformer;

impl JsonResponseTransformer {
    /// Creates a new JSON response transformer.
    pub fn new() -> Self {
        Self
    }
}

impl ResponseTransformer for JsonResponseTransformer {
    fn transform(&self, body: &[u8]) -> Result<Vec<Place>, GeocoderError> {
        /// Forward geocoding answers with an array of places; reverse
        /// geocoding with a single object. Unknown fields are ignored.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Response {
            Many(Vec<Place>),
            One(Place),
        }

        let response: Response = serde_json::from_slice(body)
            .map_err(|e| GeocoderError::InvalidResponse(e.to_string()))?;

        Ok(match response {
            Response::Many(places) => places,
            Response::One(place) => vec![place],
        })
    }
}

//! Geocoder types and traits.

use serde::Deserialize;
use thiserror::Error;

use super::request::{ForwardGeocodingRequest, ReverseGeocodingRequest};

/// Errors that can occur while performing a geocoding request.
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The provider response could not be transformed into place results.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A normalized geocoding result.
///
/// The minimal shape shared by every supported provider: transformers may
/// carry richer data in their own types, but a [`GeocoderService`] always
/// yields at least this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    /// Provider-assigned place identifier.
    pub place_id: u64,
    /// Human-readable place description.
    pub display_name: String,
}

/// Trait for geocoding services.
///
/// Implementors resolve free-text queries to places (forward geocoding)
/// and coordinates to places (reverse geocoding) against one configured
/// provider. Implementations are immutable after construction and safe to
/// share across threads when their HTTP client and transformer are.
pub trait GeocoderService: Send + Sync {
    /// Resolves a free-text query to a list of places.
    fn forward_geocoding(
        &self,
        request: &ForwardGeocodingRequest,
    ) -> Result<Vec<Place>, GeocoderError>;

    /// Resolves a coordinate pair to a list of places.
    fn reverse_geocoding(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<Vec<Place>, GeocoderError>;

    /// Returns the service's name for logging and identification.
    fn name(&self) -> &str;
}

//! Request parameter types for the geocoding operations.

/// Parameters for a forward geocoding request.
///
/// # Example
///
/// ```
/// use nominatim_geocoder::geocoder::ForwardGeocodingRequest;
///
/// let request = ForwardGeocodingRequest::new("1600 Amphitheatre Parkway");
/// assert_eq!(request.query, "1600 Amphitheatre Parkway");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardGeocodingRequest {
    /// Free-text place query.
    pub query: String,
}

impl ForwardGeocodingRequest {
    /// Creates a forward geocoding request for the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Parameters for a reverse geocoding request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseGeocodingRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl ReverseGeocodingRequest {
    /// Creates a reverse geocoding request for the given coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

//! HTTP client abstraction for testability.

use tracing::{debug, trace, warn};

use super::types::GeocoderError;

/// User agent sent when the host does not configure one.
const DEFAULT_USER_AGENT: &str = concat!("nominatim-geocoder/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for synchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing by
/// enabling mock HTTP clients in tests. Geocoding providers only ever issue
/// GET requests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// Returns the response body as bytes or an error.
    fn get(&self, url: &str) -> Result<Vec<u8>, GeocoderError>;

    /// Performs an HTTP GET request with custom headers.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `headers` - Slice of (header_name, header_value) tuples
    fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, GeocoderError>;
}

/// Real HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, GeocoderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, GeocoderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| GeocoderError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    fn execute(&self, request: reqwest::blocking::RequestBuilder) -> Result<Vec<u8>, GeocoderError> {
        let response = request
            .send()
            .map_err(|e| GeocoderError::HttpError(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "HTTP response received");

        if !status.is_success() {
            warn!(status = status.as_u16(), "HTTP error status");
            return Err(GeocoderError::HttpError(format!("HTTP {}", status)));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| GeocoderError::HttpError(format!("Failed to read response: {}", e)))
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, GeocoderError> {
        trace!(url = url, "HTTP GET request starting");
        self.execute(self.client.get(url))
    }

    fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, GeocoderError> {
        trace!(url = url, "HTTP GET request with headers starting");

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        self.execute(request)
    }
}

//! LocationIQ geocoding service.
//!
//! Targets LocationIQ's hosted Nominatim API. Authentication is the `key`
//! query parameter carrying the configured access token; no identifying
//! headers are required.
//!
//! # URL Patterns
//!
//! - Forward: `{url}/{forward_endpoint}?key={key}&q={query}&format=json`
//! - Reverse: `{url}/{reverse_endpoint}?key={key}&lat={lat}&lon={lon}&format=json`
//!
//! When a language is configured it is appended as `accept-language`.

use urlencoding::encode;

use crate::config::LocationIqConfig;

use super::http::HttpClient;
use super::request::{ForwardGeocodingRequest, ReverseGeocodingRequest};
use super::transformer::ResponseTransformer;
use super::types::{GeocoderError, GeocoderService, Place};

/// Geocoding service backed by the LocationIQ API.
#[derive(Debug)]
pub struct LocationIqGeocoder<C: HttpClient, T: ResponseTransformer> {
    http_client: C,
    transformer: T,
    config: LocationIqConfig,
}

impl<C: HttpClient, T: ResponseTransformer> LocationIqGeocoder<C, T> {
    /// Creates a new LocationIQ geocoder from a validated configuration.
    pub fn new(http_client: C, transformer: T, config: LocationIqConfig) -> Self {
        Self {
            http_client,
            transformer,
            config,
        }
    }

    /// Returns the configuration this service was built from.
    pub fn config(&self) -> &LocationIqConfig {
        &self.config
    }

    fn build_forward_url(&self, request: &ForwardGeocodingRequest) -> String {
        let mut url = format!(
            "{}/{}?key={}&q={}&format=json",
            self.config.url,
            self.config.forward_geocoding_endpoint,
            encode(&self.config.key),
            encode(&request.query),
        );
        self.append_language(&mut url);
        url
    }

    fn build_reverse_url(&self, request: &ReverseGeocodingRequest) -> String {
        let mut url = format!(
            "{}/{}?key={}&lat={}&lon={}&format=json",
            self.config.url,
            self.config.reverse_geocoding_endpoint,
            encode(&self.config.key),
            request.latitude,
            request.longitude,
        );
        self.append_language(&mut url);
        url
    }

    fn append_language(&self, url: &mut String) {
        if let Some(language) = &self.config.language {
            url.push_str("&accept-language=");
            url.push_str(&encode(language));
        }
    }

    fn request(&self, url: &str) -> Result<Vec<Place>, GeocoderError> {
        let body = self.http_client.get(url)?;
        self.transformer.transform(&body)
    }
}

impl<C: HttpClient, T: ResponseTransformer> GeocoderService for LocationIqGeocoder<C, T> {
    fn forward_geocoding(
        &self,
        request: &ForwardGeocodingRequest,
    ) -> Result<Vec<Place>, GeocoderError> {
        self.request(&self.build_forward_url(request))
    }

    fn reverse_geocoding(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<Vec<Place>, GeocoderError> {
        self.request(&self.build_reverse_url(request))
    }

    fn name(&self) -> &str {
        "LocationIQ"
    }
}

//! Generic geocoding service.
//!
//! Targets any Nominatim-compatible instance that needs no credentials,
//! typically a self-hosted deployment.
//!
//! # URL Patterns
//!
//! - Forward: `{url}/{forward_endpoint}?q={query}&format=jsonv2`
//! - Reverse: `{url}/{reverse_endpoint}?lat={lat}&lon={lon}&format=jsonv2`
//!
//! When a language is configured it is appended as `accept-language`.

use urlencoding::encode;

use crate::config::GenericConfig;

use super::http::HttpClient;
use super::request::{ForwardGeocodingRequest, ReverseGeocodingRequest};
use super::transformer::ResponseTransformer;
use super::types::{GeocoderError, GeocoderService, Place};

/// Geocoding service backed by an unauthenticated Nominatim-compatible
/// instance.
#[derive(Debug)]
pub struct GenericGeocoder<C: HttpClient, T: ResponseTransformer> {
    http_client: C,
    transformer: T,
    config: GenericConfig,
}

impl<C: HttpClient, T: ResponseTransformer> GenericGeocoder<C, T> {
    /// Creates a new generic geocoder from a validated configuration.
    pub fn new(http_client: C, transformer: T, config: GenericConfig) -> Self {
        Self {
            http_client,
            transformer,
            config,
        }
    }

    /// Returns the configuration this service was built from.
    pub fn config(&self) -> &GenericConfig {
        &self.config
    }

    fn build_forward_url(&self, request: &ForwardGeocodingRequest) -> String {
        let mut url = format!(
            "{}/{}?q={}&format=jsonv2",
            self.config.url,
            self.config.forward_geocoding_endpoint,
            encode(&request.query),
        );
        self.append_language(&mut url);
        url
    }

    fn build_reverse_url(&self, request: &ReverseGeocodingRequest) -> String {
        let mut url = format!(
            "{}/{}?lat={}&lon={}&format=jsonv2",
            self.config.url,
            self.config.reverse_geocoding_endpoint,
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

impl<C: HttpClient, T: ResponseTransformer> GeocoderService for GenericGeocoder<C, T> {
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
        "Generic"
    }
}

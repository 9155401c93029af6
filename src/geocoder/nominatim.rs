//! Nominatim geocoding service.
//!
//! Targets a Nominatim instance following the public instance's usage
//! policy: every request identifies the application through the configured
//! `User-Agent` header and carries the contact email as a query parameter.
//!
//! # URL Patterns
//!
//! - Forward: `{url}/{forward_endpoint}?q={query}&format=jsonv2&email={email}`
//! - Reverse: `{url}/{reverse_endpoint}?lat={lat}&lon={lon}&format=jsonv2&email={email}`
//!
//! When a language is configured it is appended as `accept-language`.

use urlencoding::encode;

use crate::config::NominatimConfig;

use super::http::HttpClient;
use super::request::{ForwardGeocodingRequest, ReverseGeocodingRequest};
use super::transformer::ResponseTransformer;
use super::types::{GeocoderError, GeocoderService, Place};

/// Geocoding service backed by a Nominatim instance.
#[derive(Debug)]
pub struct NominatimGeocoder<C: HttpClient, T: ResponseTransformer> {
    http_client: C,
    transformer: T,
    config: NominatimConfig,
}

impl<C: HttpClient, T: ResponseTransformer> NominatimGeocoder<C, T> {
    /// Creates a new Nominatim geocoder from a validated configuration.
    pub fn new(http_client: C, transformer: T, config: NominatimConfig) -> Self {
        Self {
            http_client,
            transformer,
            config,
        }
    }

    /// Returns the configuration this service was built from.
    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }

    fn build_forward_url(&self, request: &ForwardGeocodingRequest) -> String {
        let mut url = format!(
            "{}/{}?q={}&format=jsonv2&email={}",
            self.config.url,
            self.config.forward_geocoding_endpoint,
            encode(&request.query),
            encode(&self.config.email),
        );
        self.append_language(&mut url);
        url
    }

    fn build_reverse_url(&self, request: &ReverseGeocodingRequest) -> String {
        let mut url = format!(
            "{}/{}?lat={}&lon={}&format=jsonv2&email={}",
            self.config.url,
            self.config.reverse_geocoding_endpoint,
            request.latitude,
            request.longitude,
            encode(&self.config.email),
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
        let headers = [("User-Agent", self.config.user_agent.as_str())];
        let body = self.http_client.get_with_headers(url, &headers)?;
        self.transformer.transform(&body)
    }
}

impl<C: HttpClient, T: ResponseTransformer> GeocoderService for NominatimGeocoder<C, T> {
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
        "Nominatim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoder::http::tests::MockHttpClient;
    use crate::geocoder::transformer::tests::MockTransformer;

    fn config() -> NominatimConfig {
        NominatimConfig {
            user_agent: "app-identifier".to_string(),
            email: "email@provider.net".to_string(),
            url: "https://api.org".to_string(),
            forward_geocoding_endpoint: "front".to_string(),
            reverse_geocoding_endpoint: "back".to_string(),
            language: Some("nl".to_string()),
        }
    }

    #[test]
    fn test_forward_geocoding_url_and_user_agent() {
        let http = MockHttpClient::returning(b"[]".to_vec());
        let geocoder = NominatimGeocoder::new(http.clone(), MockTransformer::default(), config());

        geocoder
            .forward_geocoding(&ForwardGeocodingRequest::new("city hall"))
            .unwrap();

        let requests = http.requests();
        assert_eq!(
            requests[0].url,
            "https://api.org/front?q=city%20hall&format=jsonv2&email=email%40provider.net&accept-language=nl"
        );
        assert_eq!(
            requests[0].headers,
            vec![("User-Agent".to_string(), "app-identifier".to_string())]
        );
    }

    #[test]
    fn test_reverse_geocoding_url() {
        let http = MockHttpClient::returning(b"{}".to_vec());
        let geocoder = NominatimGeocoder::new(http.clone(), MockTransformer::default(), config());

        geocoder
            .reverse_geocoding(&ReverseGeocodingRequest::new(52.377, 4.897))
            .unwrap();

        assert_eq!(
            http.requested_urls(),
            vec!["https://api.org/back?lat=52.377&lon=4.897&format=jsonv2&email=email%40provider.net&accept-language=nl"]
        );
    }

    #[test]
    fn test_language_is_omitted_when_unset() {
        let http = MockHttpClient::returning(b"[]".to_vec());
        let mut config = config();
        config.language = None;
        let geocoder = NominatimGeocoder::new(http.clone(), MockTransformer::default(), config);

        geocoder
            .forward_geocoding(&ForwardGeocodingRequest::new("query"))
            .unwrap();

        assert!(!http.requested_urls()[0].contains("accept-language"));
    }

    #[test]
    fn test_transformed_places_are_returned() {
        let places = vec![Place {
            place_id: 12345,
            display_name: "Beautiful Building".to_string(),
        }];
        let geocoder = NominatimGeocoder::new(
            MockHttpClient::returning(b"[]".to_vec()),
            MockTransformer::returning(places.clone()),
            config(),
        );

        let result = geocoder
            .forward_geocoding(&ForwardGeocodingRequest::new("query"))
            .unwrap();

        assert_eq!(result, places);
    }

    #[test]
    fn test_name() {
        let geocoder = NominatimGeocoder::new(
            MockHttpClient::default(),
            MockTransformer::default(),
            config(),
        );
        assert_eq!(geocoder.name(), "Nominatim");
    }
}

//! Geocoder service factory.
//!
//! Centralizes service construction: raw configuration goes in, a fully
//! wired geocoding service comes out. Resolution delegates to
//! [`crate::config::resolve`], so the factory and standalone resolution
//! can never diverge in validation order or message text.
//!
//! There is no ambient registry: the host constructs one [`Geocoder`] at
//! startup and shares the handle (typically behind an `Arc`) with whatever
//! needs geocoding.

use toml::Table;
use tracing::debug;

use crate::config::{resolve, ConfigError, ServiceConfig};

use super::generic::GenericGeocoder;
use super::http::HttpClient;
use super::location_iq::LocationIqGeocoder;
use super::nominatim::NominatimGeocoder;
use super::request::{ForwardGeocodingRequest, ReverseGeocodingRequest};
use super::transformer::ResponseTransformer;
use super::types::{GeocoderError, GeocoderService, Place};

/// Factory for creating geocoder service instances.
///
/// Holds the shared HTTP client and response transformer handles and
/// injects them into whichever service the configuration selects.
///
/// # Example
///
/// ```no_run
/// use nominatim_geocoder::geocoder::{
///     GeocoderServiceFactory, JsonResponseTransformer, ReqwestClient,
/// };
///
/// let http_client = ReqwestClient::new()?;
/// let factory = GeocoderServiceFactory::new(http_client, JsonResponseTransformer::new());
///
/// let data = nominatim_geocoder::config::load_from("nominatim.toml".as_ref())?;
/// let geocoder = factory.make(&data)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GeocoderServiceFactory<C: HttpClient, T: ResponseTransformer> {
    http_client: C,
    transformer: T,
}

impl<C: HttpClient, T: ResponseTransformer> GeocoderServiceFactory<C, T> {
    /// Creates a new factory with the given HTTP client and transformer.
    pub fn new(http_client: C, transformer: T) -> Self {
        Self {
            http_client,
            transformer,
        }
    }

    /// Resolve a raw configuration table and construct the selected service.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending dotted configuration
    /// path when validation fails.
    pub fn make(self, data: &Table) -> Result<Geocoder<C, T>, ConfigError> {
        let config = resolve(data)?;
        Ok(self.from_config(config))
    }

    /// Construct the selected service from an already-resolved configuration.
    pub fn from_config(self, config: ServiceConfig) -> Geocoder<C, T> {
        debug!(service = config.kind().as_str(), "constructing geocoder service");

        match config {
            ServiceConfig::Nominatim(config) => Geocoder::Nominatim(NominatimGeocoder::new(
                self.http_client,
                self.transformer,
                config,
            )),
            ServiceConfig::LocationIq(config) => Geocoder::LocationIq(LocationIqGeocoder::new(
                self.http_client,
                self.transformer,
                config,
            )),
            ServiceConfig::Generic(config) => Geocoder::Generic(GenericGeocoder::new(
                self.http_client,
                self.transformer,
                config,
            )),
        }
    }
}

/// Enum holding the constructed geocoder service variants.
///
/// Allows the factory to return different concrete service types behind a
/// single [`GeocoderService`] implementation.
#[derive(Debug)]
pub enum Geocoder<C: HttpClient, T: ResponseTransformer> {
    /// Nominatim-backed service.
    Nominatim(NominatimGeocoder<C, T>),
    /// LocationIQ-backed service.
    LocationIq(LocationIqGeocoder<C, T>),
    /// Generic instance service.
    Generic(GenericGeocoder<C, T>),
}

impl<C: HttpClient, T: ResponseTransformer> GeocoderService for Geocoder<C, T> {
    fn forward_geocoding(
        &self,
        request: &ForwardGeocodingRequest,
    ) -> Result<Vec<Place>, GeocoderError> {
        match self {
            Self::Nominatim(s) => s.forward_geocoding(request),
            Self::LocationIq(s) => s.forward_geocoding(request),
            Self::Generic(s) => s.forward_geocoding(request),
        }
    }

    fn reverse_geocoding(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<Vec<Place>, GeocoderError> {
        match self {
            Self::Nominatim(s) => s.reverse_geocoding(request),
            Self::LocationIq(s) => s.reverse_geocoding(request),
            Self::Generic(s) => s.reverse_geocoding(request),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Nominatim(s) => s.name(),
            Self::LocationIq(s) => s.name(),
            Self::Generic(s) => s.name(),
        }
    }
}

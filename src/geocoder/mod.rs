//! Geocoding service abstraction
//!
//! This module provides traits and implementations for forward and reverse
//! geocoding against Nominatim-compatible providers (a Nominatim instance,
//! LocationIQ, or a generic self-hosted deployment).
//!
//! # Factory Pattern
//!
//! For configuration-driven construction, use the
//! [`GeocoderServiceFactory`]:
//!
//! ```no_run
//! use nominatim_geocoder::geocoder::{
//!     GeocoderServiceFactory, JsonResponseTransformer, ReqwestClient,
//! };
//!
//! let http_client = ReqwestClient::new()?;
//! let factory = GeocoderServiceFactory::new(http_client, JsonResponseTransformer::new());
//! let data = nominatim_geocoder::config::load_from("nominatim.toml".as_ref())?;
//! let geocoder = factory.make(&data)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod factory;
mod generic;
mod http;
mod location_iq;
mod nominatim;
mod request;
mod transformer;
mod types;

pub use factory::{Geocoder, GeocoderServiceFactory};
pub use generic::GenericGeocoder;
pub use http::{HttpClient, ReqwestClient};
pub use location_iq::LocationIqGeocoder;
pub use nominatim::NominatimGeocoder;
pub use request::{ForwardGeocodingRequest, ReverseGeocodingRequest};
pub use transformer::{JsonResponseTransformer, ResponseTransformer};
pub use types::{GeocoderError, GeocoderService, Place};

#[cfg(test)]
pub use http::tests::MockHttpClient;
#[cfg(test)]
pub use transformer::tests::MockTransformer;

//! Configuration-driven geocoder services for Nominatim-compatible
//! providers.
//!
//! The crate does two things: it validates a nested configuration mapping
//! into a typed provider configuration ([`config`]), and it constructs the
//! matching geocoding service wired to a shared HTTP client and response
//! transformer ([`geocoder`]). Three providers are supported: a Nominatim
//! instance, LocationIQ, and any generic Nominatim-compatible deployment.
//!
//! Resolution is meant to run once, at application startup. The resulting
//! service is immutable and safe to share (e.g. behind an `Arc`) for the
//! lifetime of the process; every configuration error is raised at
//! construction time with a message naming the offending dotted
//! configuration path.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use nominatim_geocoder::config;
//! use nominatim_geocoder::geocoder::{
//!     ForwardGeocodingRequest, GeocoderService, GeocoderServiceFactory,
//!     JsonResponseTransformer, ReqwestClient,
//! };
//!
//! let data = config::load_from("nominatim.toml".as_ref())?;
//!
//! let factory = GeocoderServiceFactory::new(
//!     ReqwestClient::new()?,
//!     JsonResponseTransformer::new(),
//! );
//! let geocoder = Arc::new(factory.make(&data)?);
//!
//! let places = geocoder.forward_geocoding(&ForwardGeocodingRequest::new("Dam Square"))?;
//! for place in places {
//!     println!("{}: {}", place.place_id, place.display_name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A copyable configuration template ships as `config/nominatim.toml`.

pub mod config;
pub mod geocoder;

pub use config::{ConfigError, ServiceConfig, ServiceKind};
pub use geocoder::{GeocoderService, GeocoderServiceFactory, Place};

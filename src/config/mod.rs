//! Configuration loading, validation, and provider selection.
//!
//! The raw configuration is a TOML table following the schema of the
//! shipped `config/nominatim.toml` template. [`resolve`] turns it into
//! exactly one validated [`ServiceConfig`] variant, failing fast with a
//! [`ConfigError`] that names the offending dotted configuration path.
//!
//! # Example
//!
//! ```
//! use nominatim_geocoder::config::{resolve, ServiceKind};
//!
//! let data = toml::toml! {
//!     service = "generic"
//!
//!     [services.generic]
//!     url = "https://nominatim.example.org"
//!     forward_geocoding_endpoint = "search"
//!     reverse_geocoding_endpoint = "reverse"
//! };
//!
//! let config = resolve(&data)?;
//! assert_eq!(config.kind(), ServiceKind::Generic);
//! # Ok::<(), nominatim_geocoder::config::ConfigError>(())
//! ```

mod defaults;
mod error;
mod file;
mod resolver;
mod service;
mod settings;

pub use defaults::{
    template, DEFAULT_SERVICE, LOCATION_IQ_FORWARD_GEOCODING_ENDPOINT, LOCATION_IQ_REVERSE_GEOCODING_ENDPOINT,
    LOCATION_IQ_URL, NOMINATIM_FORWARD_GEOCODING_ENDPOINT, NOMINATIM_REVERSE_GEOCODING_ENDPOINT, NOMINATIM_URL,
};
pub use error::ConfigError;
pub use file::load_from;
pub use resolver::resolve;
pub use service::ServiceKind;
pub use settings::{GenericConfig, LocationIqConfig, NominatimConfig, ServiceConfig};

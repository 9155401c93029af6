//! Configuration error type.

use thiserror::Error;

/// Errors raised while loading or resolving the nominatim configuration.
///
/// Every resolution variant names the offending dotted configuration path
/// so an operator can fix the config file directly from the message. These
/// are authoring errors: nothing here is retried or recovered from, the
/// expectation is that registration fails until the configuration is
/// corrected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The top-level configuration section is absent or empty.
    #[error("Nominatim config not found")]
    NotFound,

    /// The `service` value does not match any supported service kind.
    #[error("The config value 'nominatim.service' is not supported")]
    UnsupportedService,

    /// The `language` value is present but not a string.
    #[error("The config value 'nominatim.language' must be a string or null")]
    LanguageNotAString,

    /// The `services.<service>` section for the selected service is missing.
    #[error("The config value 'nominatim.services.{service}' must be present")]
    ServiceConfigMissing {
        /// Configuration string of the selected service.
        service: &'static str,
    },

    /// A required field under `services.<service>` is missing or not a string.
    #[error("The config value 'nominatim.services.{service}.{field}' must be a string")]
    ValueNotAString {
        /// Configuration string of the selected service.
        service: &'static str,
        /// Name of the offending field.
        field: &'static str,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    /// Failed to parse the configuration file as TOML.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

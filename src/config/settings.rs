//! Resolved provider configuration value objects.
//!
//! Each struct is the validated, immutable form of one `[services.*]`
//! section. These are pure data types: validation and construction happen
//! in [`super::resolver`].

use super::service::ServiceKind;

/// Configuration for a Nominatim instance.
///
/// The public instance's usage policy requires an identifying user agent
/// and a contact email on every request, so both are mandatory here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominatimConfig {
    /// Value sent as the `User-Agent` header, identifying the application.
    pub user_agent: String,
    /// Contact email sent with every request.
    pub email: String,
    /// Base URL of the instance.
    pub url: String,
    /// Path of the forward geocoding endpoint, relative to `url`.
    pub forward_geocoding_endpoint: String,
    /// Path of the reverse geocoding endpoint, relative to `url`.
    pub reverse_geocoding_endpoint: String,
    /// Preferred language for result display names.
    pub language: Option<String>,
}

/// Configuration for the LocationIQ hosted API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationIqConfig {
    /// LocationIQ access token, sent as the `key` query parameter.
    pub key: String,
    /// Base URL of the API.
    pub url: String,
    /// Path of the forward geocoding endpoint, relative to `url`.
    pub forward_geocoding_endpoint: String,
    /// Path of the reverse geocoding endpoint, relative to `url`.
    pub reverse_geocoding_endpoint: String,
    /// Preferred language for result display names.
    pub language: Option<String>,
}

/// Configuration for a generic Nominatim-compatible instance.
///
/// Carries no credentials; suitable for self-hosted instances without
/// usage-policy requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericConfig {
    /// Base URL of the instance.
    pub url: String,
    /// Path of the forward geocoding endpoint, relative to `url`.
    pub forward_geocoding_endpoint: String,
    /// Path of the reverse geocoding endpoint, relative to `url`.
    pub reverse_geocoding_endpoint: String,
    /// Preferred language for result display names.
    pub language: Option<String>,
}

/// A resolved provider configuration, one variant per [`ServiceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceConfig {
    /// Generic instance configuration.
    Generic(GenericConfig),
    /// LocationIQ configuration.
    LocationIq(LocationIqConfig),
    /// Nominatim configuration.
    Nominatim(NominatimConfig),
}

impl ServiceConfig {
    /// Returns the service kind this configuration belongs to.
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceConfig::Generic(_) => ServiceKind::Generic,
            ServiceConfig::LocationIq(_) => ServiceKind::LocationIq,
            ServiceConfig::Nominatim(_) => ServiceKind::Nominatim,
        }
    }

    /// Returns the base URL shared by every variant.
    pub fn url(&self) -> &str {
        match self {
            ServiceConfig::Generic(c) => &c.url,
            ServiceConfig::LocationIq(c) => &c.url,
            ServiceConfig::Nominatim(c) => &c.url,
        }
    }

    /// Returns the forward geocoding endpoint path.
    pub fn forward_geocoding_endpoint(&self) -> &str {
        match self {
            ServiceConfig::Generic(c) => &c.forward_geocoding_endpoint,
            ServiceConfig::LocationIq(c) => &c.forward_geocoding_endpoint,
            ServiceConfig::Nominatim(c) => &c.forward_geocoding_endpoint,
        }
    }

    /// Returns the reverse geocoding endpoint path.
    pub fn reverse_geocoding_endpoint(&self) -> &str {
        match self {
            ServiceConfig::Generic(c) => &c.reverse_geocoding_endpoint,
            ServiceConfig::LocationIq(c) => &c.reverse_geocoding_endpoint,
            ServiceConfig::Nominatim(c) => &c.reverse_geocoding_endpoint,
        }
    }

    /// Returns the configured language preference, if any.
    pub fn language(&self) -> Option<&str> {
        match self {
            ServiceConfig::Generic(c) => c.language.as_deref(),
            ServiceConfig::LocationIq(c) => c.language.as_deref(),
            ServiceConfig::Nominatim(c) => c.language.as_deref(),
        }
    }
}

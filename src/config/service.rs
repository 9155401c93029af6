//! The closed set of supported geocoding services.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Identifies which backend geocoding service the package is configured for.
///
/// The set is closed: adding a provider means adding a variant here plus a
/// matching arm in the resolver and factory. String values match the
/// `service` key accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// A self-hosted or otherwise unauthenticated Nominatim-compatible instance.
    Generic,
    /// LocationIQ's hosted Nominatim API (requires an access token).
    LocationIq,
    /// A Nominatim instance following the public instance's usage policy
    /// (requires an identifying user agent and contact email).
    Nominatim,
}

impl ServiceKind {
    /// All supported service kinds, for table-driven iteration.
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Generic,
        ServiceKind::LocationIq,
        ServiceKind::Nominatim,
    ];

    /// Returns the configuration string for this service kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Generic => "generic",
            ServiceKind::LocationIq => "location_iq",
            ServiceKind::Nominatim => "nominatim",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(ServiceKind::Generic),
            "location_iq" => Ok(ServiceKind::LocationIq),
            "nominatim" => Ok(ServiceKind::Nominatim),
            _ => Err(ConfigError::UnsupportedService),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

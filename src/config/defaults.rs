//! Default configuration values.
//!
//! URL and endpoint defaults for the hosted provider instances. Credentials
//! (Nominatim user agent and email, LocationIQ key) have no defaults: the
//! operator must supply them.

use toml::{Table, Value};

use super::service::ServiceKind;

/// Service selected when a host does not override `service`.
pub const DEFAULT_SERVICE: ServiceKind = ServiceKind::Nominatim;

/// Base URL of the public Nominatim instance.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Forward geocoding endpoint of the public Nominatim instance.
pub const NOMINATIM_FORWARD_GEOCODING_ENDPOINT: &str = "search";

/// Reverse geocoding endpoint of the public Nominatim instance.
pub const NOMINATIM_REVERSE_GEOCODING_ENDPOINT: &str = "reverse";

/// Base URL of LocationIQ's EU cluster.
pub const LOCATION_IQ_URL: &str = "https://eu1.locationiq.com/v1";

/// Forward geocoding endpoint of the LocationIQ API.
pub const LOCATION_IQ_FORWARD_GEOCODING_ENDPOINT: &str = "search.php";

/// Reverse geocoding endpoint of the LocationIQ API.
pub const LOCATION_IQ_REVERSE_GEOCODING_ENDPOINT: &str = "reverse.php";

/// Build the default raw configuration table.
///
/// Matches the copyable template shipped in `config/nominatim.toml`:
/// hosted instance URLs and endpoints are filled in, credential fields are
/// empty strings the operator is expected to overwrite. A `generic`
/// section is deliberately absent since a generic instance has no
/// meaningful default URL.
pub fn template() -> Table {
    let mut nominatim = Table::new();
    nominatim.insert("user_agent".to_string(), Value::String(String::new()));
    nominatim.insert("email".to_string(), Value::String(String::new()));
    nominatim.insert("url".to_string(), Value::String(NOMINATIM_URL.to_string()));
    nominatim.insert(
        "forward_geocoding_endpoint".to_string(),
        Value::String(NOMINATIM_FORWARD_GEOCODING_ENDPOINT.to_string()),
    );
    nominatim.insert(
        "reverse_geocoding_endpoint".to_string(),
        Value::String(NOMINATIM_REVERSE_GEOCODING_ENDPOINT.to_string()),
    );

    let mut location_iq = Table::new();
    location_iq.insert("key".to_string(), Value::String(String::new()));
    location_iq.insert("url".to_string(), Value::String(LOCATION_IQ_URL.to_string()));
    location_iq.insert(
        "forward_geocoding_endpoint".to_string(),
        Value::String(LOCATION_IQ_FORWARD_GEOCODING_ENDPOINT.to_string()),
    );
    location_iq.insert(
        "reverse_geocoding_endpoint".to_string(),
        Value::String(LOCATION_IQ_REVERSE_GEOCODING_ENDPOINT.to_string()),
    );

    let mut services = Table::new();
    services.insert("nominatim".to_string(), Value::Table(nominatim));
    services.insert("location_iq".to_string(), Value::Table(location_iq));

    let mut data = Table::new();
    data.insert(
        "service".to_string(),
        Value::String(DEFAULT_SERVICE.as_str().to_string()),
    );
    data.insert("services".to_string(), Value::Table(services));
    data
}

//! Raw configuration resolution.
//!
//! This module is the single place where raw configuration keys are mapped
//! to the typed [`ServiceConfig`] variants. Validation is fail-fast and the
//! order is fixed (service, then language, then the selected service
//! section, then its fields in declaration order) so error messages are
//! deterministic for a given broken configuration.

use toml::{Table, Value};
use tracing::debug;

use super::error::ConfigError;
use super::service::ServiceKind;
use super::settings::{GenericConfig, LocationIqConfig, NominatimConfig, ServiceConfig};

/// Resolve a raw configuration table into a validated [`ServiceConfig`].
///
/// The table is the `nominatim` configuration section of the host
/// application, typically loaded via [`super::file::load_from`] or built
/// from [`super::defaults::template`].
///
/// # Errors
///
/// Returns a [`ConfigError`] naming the offending dotted configuration
/// path at the first violation encountered.
pub fn resolve(data: &Table) -> Result<ServiceConfig, ConfigError> {
    if data.is_empty() {
        return Err(ConfigError::NotFound);
    }

    let service = resolve_service(data)?;
    let language = resolve_language(data)?;
    let section = resolve_service_section(data, service)?;

    debug!(service = service.as_str(), "resolving geocoding service configuration");

    let config = match service {
        ServiceKind::Nominatim => ServiceConfig::Nominatim(NominatimConfig {
            user_agent: string_value(section, service, "user_agent")?,
            email: string_value(section, service, "email")?,
            url: string_value(section, service, "url")?,
            forward_geocoding_endpoint: string_value(section, service, "forward_geocoding_endpoint")?,
            reverse_geocoding_endpoint: string_value(section, service, "reverse_geocoding_endpoint")?,
            language,
        }),
        ServiceKind::LocationIq => ServiceConfig::LocationIq(LocationIqConfig {
            key: string_value(section, service, "key")?,
            url: string_value(section, service, "url")?,
            forward_geocoding_endpoint: string_value(section, service, "forward_geocoding_endpoint")?,
            reverse_geocoding_endpoint: string_value(section, service, "reverse_geocoding_endpoint")?,
            language,
        }),
        ServiceKind::Generic => ServiceConfig::Generic(GenericConfig {
            url: string_value(section, service, "url")?,
            forward_geocoding_endpoint: string_value(section, service, "forward_geocoding_endpoint")?,
            reverse_geocoding_endpoint: string_value(section, service, "reverse_geocoding_endpoint")?,
            language,
        }),
    };

    Ok(config)
}

/// Read and validate the `service` selector.
fn resolve_service(data: &Table) -> Result<ServiceKind, ConfigError> {
    data.get("service")
        .and_then(Value::as_str)
        .ok_or(ConfigError::UnsupportedService)?
        .parse()
}

/// Read and validate the optional `language` override.
///
/// TOML has no null literal, so "null" maps to the key being absent.
fn resolve_language(data: &Table) -> Result<Option<String>, ConfigError> {
    match data.get("language") {
        None => Ok(None),
        Some(Value::String(language)) => Ok(Some(language.clone())),
        Some(_) => Err(ConfigError::LanguageNotAString),
    }
}

/// Look up the `services.<service>` section for the selected service.
fn resolve_service_section(data: &Table, service: ServiceKind) -> Result<&Table, ConfigError> {
    data.get("services")
        .and_then(Value::as_table)
        .and_then(|services| services.get(service.as_str()))
        .and_then(Value::as_table)
        .ok_or(ConfigError::ServiceConfigMissing {
            service: service.as_str(),
        })
}

/// Read a required string field from a service section.
fn string_value(
    section: &Table,
    service: ServiceKind,
    field: &'static str,
) -> Result<String, ConfigError> {
    section
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ConfigError::ValueNotAString {
            service: service.as_str(),
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::toml;

    fn full_config() -> Table {
        toml! {
            service = "nominatim"
            language = "nl"

            [services.nominatim]
            user_agent = "app-identifier"
            email = "email@provider.net"
            url = "https://api.org"
            forward_geocoding_endpoint = "front"
            reverse_geocoding_endpoint = "back"

            [services.location_iq]
            key = "access-token"
            url = "https://api.org"
            forward_geocoding_endpoint = "front"
            reverse_geocoding_endpoint = "back"

            [services.generic]
            url = "https://api.org"
            forward_geocoding_endpoint = "front"
            reverse_geocoding_endpoint = "back"
        }
    }

    #[test]
    fn test_resolves_nominatim_config() {
        let config = resolve(&full_config()).unwrap();

        let ServiceConfig::Nominatim(nominatim) = config else {
            panic!("expected a nominatim config, got {config:?}");
        };

        assert_eq!(nominatim.user_agent, "app-identifier");
        assert_eq!(nominatim.email, "email@provider.net");
        assert_eq!(nominatim.url, "https://api.org");
        assert_eq!(nominatim.forward_geocoding_endpoint, "front");
        assert_eq!(nominatim.reverse_geocoding_endpoint, "back");
        assert_eq!(nominatim.language.as_deref(), Some("nl"));
    }

    #[test]
    fn test_resolves_location_iq_config() {
        let mut data = full_config();
        data.insert("service".to_string(), Value::String("location_iq".to_string()));

        let config = resolve(&data).unwrap();

        let ServiceConfig::LocationIq(location_iq) = config else {
            panic!("expected a location_iq config, got {config:?}");
        };

        assert_eq!(location_iq.key, "access-token");
        assert_eq!(location_iq.url, "https://api.org");
        assert_eq!(location_iq.forward_geocoding_endpoint, "front");
        assert_eq!(location_iq.reverse_geocoding_endpoint, "back");
        assert_eq!(location_iq.language.as_deref(), Some("nl"));
    }

    #[test]
    fn test_resolves_generic_config() {
        let mut data = full_config();
        data.insert("service".to_string(), Value::String("generic".to_string()));

        let config = resolve(&data).unwrap();

        let ServiceConfig::Generic(generic) = config else {
            panic!("expected a generic config, got {config:?}");
        };

        assert_eq!(generic.url, "https://api.org");
        assert_eq!(generic.forward_geocoding_endpoint, "front");
        assert_eq!(generic.reverse_geocoding_endpoint, "back");
        assert_eq!(generic.language.as_deref(), Some("nl"));
    }

    #[test]
    fn test_language_is_optional() {
        let mut data = full_config();
        data.remove("language");

        let config = resolve(&data).unwrap();
        assert_eq!(config.language(), None);
    }

    #[test]
    fn test_empty_config_is_not_found() {
        assert_eq!(resolve(&Table::new()), Err(ConfigError::NotFound));
    }

    #[test]
    fn test_unsupported_service() {
        let data = toml! {
            service = "foo"
        };

        let err = resolve(&data).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedService);
        assert_eq!(
            err.to_string(),
            "The config value 'nominatim.service' is not supported"
        );
    }

    #[test]
    fn test_missing_service_is_unsupported() {
        let data = toml! {
            language = "nl"
        };

        assert_eq!(resolve(&data), Err(ConfigError::UnsupportedService));
    }

    #[test]
    fn test_non_string_language() {
        let data = toml! {
            service = "nominatim"
            language = 123
        };

        let err = resolve(&data).unwrap_err();
        assert_eq!(err, ConfigError::LanguageNotAString);
        assert_eq!(
            err.to_string(),
            "The config value 'nominatim.language' must be a string or null"
        );
    }

    #[test]
    fn test_missing_service_section_for_every_kind() {
        for kind in ServiceKind::ALL {
            let mut data = toml! {
                language = "nl"
            };
            data.insert("service".to_string(), Value::String(kind.as_str().to_string()));
            data.insert("services".to_string(), Value::Table(Table::new()));

            let err = resolve(&data).unwrap_err();
            assert_eq!(
                err,
                ConfigError::ServiceConfigMissing {
                    service: kind.as_str()
                }
            );
            assert_eq!(
                err.to_string(),
                format!("The config value 'nominatim.services.{kind}' must be present")
            );
        }
    }

    #[test]
    fn test_missing_services_table_for_every_kind() {
        for kind in ServiceKind::ALL {
            let mut data = Table::new();
            data.insert("service".to_string(), Value::String(kind.as_str().to_string()));

            assert_eq!(
                resolve(&data),
                Err(ConfigError::ServiceConfigMissing {
                    service: kind.as_str()
                })
            );
        }
    }

    #[test]
    fn test_each_missing_field_is_reported_alone() {
        let cases: &[(ServiceKind, &'static str)] = &[
            (ServiceKind::Nominatim, "user_agent"),
            (ServiceKind::Nominatim, "email"),
            (ServiceKind::Nominatim, "url"),
            (ServiceKind::Nominatim, "forward_geocoding_endpoint"),
            (ServiceKind::Nominatim, "reverse_geocoding_endpoint"),
            (ServiceKind::LocationIq, "key"),
            (ServiceKind::LocationIq, "url"),
            (ServiceKind::LocationIq, "forward_geocoding_endpoint"),
            (ServiceKind::LocationIq, "reverse_geocoding_endpoint"),
            (ServiceKind::Generic, "url"),
            (ServiceKind::Generic, "forward_geocoding_endpoint"),
            (ServiceKind::Generic, "reverse_geocoding_endpoint"),
        ];

        for &(kind, field) in cases {
            let mut data = full_config();
            data.insert("service".to_string(), Value::String(kind.as_str().to_string()));

            let services = data
                .get_mut("services")
                .and_then(Value::as_table_mut)
                .unwrap();
            let section = services
                .get_mut(kind.as_str())
                .and_then(Value::as_table_mut)
                .unwrap();
            section.remove(field);

            let err = resolve(&data).unwrap_err();
            assert_eq!(
                err,
                ConfigError::ValueNotAString {
                    service: kind.as_str(),
                    field,
                },
                "removing {kind}.{field}"
            );
            assert_eq!(
                err.to_string(),
                format!("The config value 'nominatim.services.{kind}.{field}' must be a string")
            );
        }
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let mut data = full_config();
        let services = data
            .get_mut("services")
            .and_then(Value::as_table_mut)
            .unwrap();
        let section = services
            .get_mut("nominatim")
            .and_then(Value::as_table_mut)
            .unwrap();
        section.insert("email".to_string(), Value::Integer(7));

        assert_eq!(
            resolve(&data),
            Err(ConfigError::ValueNotAString {
                service: "nominatim",
                field: "email",
            })
        );
    }

    #[test]
    fn test_validation_is_fail_fast() {
        // Remove two fields; only the first in declaration order is reported.
        let mut data = full_config();
        let services = data
            .get_mut("services")
            .and_then(Value::as_table_mut)
            .unwrap();
        let section = services
            .get_mut("nominatim")
            .and_then(Value::as_table_mut)
            .unwrap();
        section.remove("user_agent");
        section.remove("url");

        assert_eq!(
            resolve(&data),
            Err(ConfigError::ValueNotAString {
                service: "nominatim",
                field: "user_agent",
            })
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let data = full_config();
        assert_eq!(resolve(&data).unwrap(), resolve(&data).unwrap());
    }
}

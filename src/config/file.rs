//! Configuration file loading.

use std::path::Path;

use toml::Table;

use super::error::ConfigError;

/// Load a raw configuration table from a TOML file.
///
/// The file follows the schema of the shipped `config/nominatim.toml`
/// template. Loading performs no validation beyond TOML syntax; pass the
/// result to [`super::resolver::resolve`].
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] when the file cannot be read and
/// [`ConfigError::ParseError`] when it is not valid TOML.
pub fn load_from(path: &Path) -> Result<Table, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
    let data = content.parse()?;
    Ok(data)
}

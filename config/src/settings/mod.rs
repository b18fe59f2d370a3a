//! Validated generator settings.
//!
//! Properties arrive as raw key/value strings from whatever front end loads
//! them. They are parsed and checked here, once, and handed to generators as
//! an immutable [`GeneratorSettings`] snapshot.

use crate::constants::{DEFAULT_DEBUG, DEFAULT_INTERPOLATE, PROPERTY_DEBUG, PROPERTY_INTERPOLATE};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the settings a mesh generator consumes.
///
/// # Examples
/// ```
/// use config::GeneratorSettings;
/// let settings = GeneratorSettings::new(true, false);
/// assert!(settings.debug);
/// assert!(!settings.interpolate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Enables verbose diagnostics in construction strategies.
    pub debug: bool,
    /// Build intermediate topology (edges, faces) in addition to cells.
    pub interpolate: bool,
}

impl GeneratorSettings {
    /// Creates settings from explicit values.
    pub fn new(debug: bool, interpolate: bool) -> Self {
        Self { debug, interpolate }
    }

    /// Parses settings from raw string properties.
    ///
    /// Missing keys keep their defaults. Unknown keys and values that are not
    /// booleans are rejected.
    ///
    /// # Examples
    /// ```
    /// use config::GeneratorSettings;
    /// let settings =
    ///     GeneratorSettings::from_properties([("interpolate", "On")]).unwrap();
    /// assert!(settings.interpolate);
    /// assert!(GeneratorSettings::from_properties([("colour", "red")]).is_err());
    /// ```
    pub fn from_properties<I, K, V>(properties: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, value) in properties {
            let key = key.as_ref().trim();
            let value = value.as_ref();
            match key {
                PROPERTY_DEBUG => settings.debug = parse_bool(key, value)?,
                PROPERTY_INTERPOLATE => settings.interpolate = parse_bool(key, value)?,
                other => return Err(ConfigError::UnknownProperty(other.to_string())),
            }
        }
        Ok(settings)
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            debug: DEFAULT_DEBUG,
            interpolate: DEFAULT_INTERPOLATE,
        }
    }
}

/// Parses a boolean property the way pyre inventories accept them.
///
/// # Examples
/// ```
/// use config::settings::parse_bool;
/// assert_eq!(parse_bool("debug", "YES"), Ok(true));
/// assert_eq!(parse_bool("debug", "0"), Ok(false));
/// ```
pub fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

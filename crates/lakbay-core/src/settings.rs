//! Settings system for the lakbay admin platform.
//!
//! This module provides the [`Settings`] struct holding deployment
//! configuration, TOML file loading with default-merge semantics,
//! environment variable overrides, and [`LazySettings`], a
//! globally-accessible, lazily-initialized settings instance.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `LAKBAY_DEBUG` | `debug` |
//! | `LAKBAY_LOG_LEVEL` | `log_level` |
//! | `LAKBAY_SITE_NAME` | `site_name` |
//! | `LAKBAY_DEFAULT_LAT` | `default_center.latitude` |
//! | `LAKBAY_DEFAULT_LON` | `default_center.longitude` |

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A geographic center point used as the map placeholder for new listings.
///
/// The default is the documented platform center (13.6218, 123.1948).
/// Deployments targeting a different region override it in their settings
/// file rather than hard-coding coordinates at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Default for CenterPoint {
    fn default() -> Self {
        Self {
            latitude: 13.6218,
            longitude: 123.1948,
        }
    }
}

/// Listing-management toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingSettings {
    /// Whether listings must provide at least one contact detail before
    /// they can be submitted for review.
    pub require_contact_details: bool,
}

/// The complete set of platform settings.
///
/// # Examples
///
/// ```
/// use lakbay_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.default_center.latitude, 13.6218);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// The display name of the admin site.
    pub site_name: String,
    /// Default map center used to seed new listing forms.
    pub default_center: CenterPoint,
    /// Listing-management toggles.
    pub listing: ListingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            site_name: "Lakbay Admin".to_string(),
            default_center: CenterPoint::default(),
            listing: ListingSettings::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML string, keeping defaults for any fields
    /// the TOML does not specify.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or cannot be deserialized.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Error> {
        // Deserialize the TOML into a serde_json::Value and merge it over
        // the serialized defaults, so partial files are valid.
        let toml_value: toml::Value = toml::from_str(toml_str)
            .map_err(|e| Error::Configuration(format!("Failed to parse TOML: {e}")))?;
        let json_value = toml_to_json(toml_value);
        let default_json = serde_json::to_value(Self::default()).map_err(|e| {
            Error::Configuration(format!("Failed to serialize default settings: {e}"))
        })?;
        let merged = merge_json(default_json, json_value);
        serde_json::from_value(merged)
            .map_err(|e| Error::Configuration(format!("Failed to deserialize settings: {e}")))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read TOML file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads settings from a TOML file and then applies environment
    /// variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut settings = Self::from_toml_file(path)?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Loads settings from just environment variables (starting from
    /// defaults).
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env_overrides();
        settings
    }

    /// Applies `LAKBAY_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LAKBAY_DEBUG") {
            self.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
        }
        if let Ok(val) = std::env::var("LAKBAY_LOG_LEVEL") {
            self.log_level = val;
        }
        if let Ok(val) = std::env::var("LAKBAY_SITE_NAME") {
            self.site_name = val;
        }
        if let Ok(val) = std::env::var("LAKBAY_DEFAULT_LAT") {
            if let Ok(lat) = val.parse::<f64>() {
                self.default_center.latitude = lat;
            }
        }
        if let Ok(val) = std::env::var("LAKBAY_DEFAULT_LON") {
            if let Ok(lon) = val.parse::<f64>() {
                self.default_center.longitude = lon;
            }
        }
    }
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_v) => override_v,
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them. The form
/// engine never reads this global: it takes the center point as an explicit
/// argument so it stays testable without bootstrapping application state.
///
/// # Panics
///
/// [`get`](LazySettings::get) panics if settings have not been configured.
/// [`configure`](LazySettings::configure) panics if called more than once.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
///
/// Call `SETTINGS.configure(settings)` once at application startup.
pub static SETTINGS: LazySettings = LazySettings::new();

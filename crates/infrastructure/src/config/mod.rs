//! Application configuration
//!
//! Split into focused sub-modules:
//! - `platform`: binary sensor platform and observation source settings
//!
//! Logging settings live with the telemetry module.

mod platform;

use std::path::Path;

use application::ApplicationError;
use domain::Condition;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use platform::{BinarySensorPlatformConfig, ObservationSourceConfig};

use crate::telemetry::TelemetryConfig;

/// Default configuration file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_FILE: &str = "smartweather";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "SMARTWEATHER";

fn default_name() -> String {
    "SmartWeather".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display-name prefix for every sensor
    #[serde(default = "default_name")]
    pub name: String,

    /// Binary sensor platform configuration
    #[serde(default)]
    pub binary_sensor: BinarySensorPlatformConfig,

    /// Observation source configuration
    #[serde(default)]
    pub observation: ObservationSourceConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            binary_sensor: BinarySensorPlatformConfig::default(),
            observation: ObservationSourceConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `smartweather.{toml,json,...}` and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or the default one) and environment
    ///
    /// An explicit file must exist; the default file is optional. Environment
    /// variables override file values, e.g. `SMARTWEATHER_NAME` or
    /// `SMARTWEATHER_BINARY_SENSOR__MONITORED_CONDITIONS=raining,freezing`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    /// Environment variable source for `SMARTWEATHER_*` overrides
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("binary_sensor.monitored_conditions")
            .try_parsing(true)
    }

    fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("name", default_name())?
            // Load from file
            .add_source(file)
            // Override with environment variables
            .add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(name = %config.name, "Configuration loaded");
        Ok(config)
    }

    /// Validate the configuration against the platform schema
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the name is blank, the
    /// scan interval is zero, or a monitored condition is not supported.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.name.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "name must not be empty".into(),
            ));
        }

        if self.binary_sensor.scan_interval_secs == 0 {
            return Err(ApplicationError::Configuration(
                "binary_sensor.scan_interval_secs must be greater than 0".into(),
            ));
        }

        for id in &self.binary_sensor.monitored_conditions {
            id.parse::<Condition>().map_err(|e| {
                ApplicationError::Configuration(format!("binary_sensor.monitored_conditions: {e}"))
            })?;
        }

        Ok(())
    }
}

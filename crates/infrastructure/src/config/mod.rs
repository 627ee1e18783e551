//! Application configuration
//!
//! Layered in this order, later sources winning:
//! 1. Built-in defaults
//! 2. `route-explorer.toml` in the working directory, or an explicit file
//! 3. Environment variables, e.g. `ROUTE_EXPLORER_ROUTING__BASE_URL`

mod map;

use std::path::Path;

use application::PipelineConfig;
use integration_routing::{NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use map::MapDisplayConfig;

/// Default configuration file name (without extension)
pub const CONFIG_FILE_NAME: &str = "route-explorer";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ROUTE_EXPLORER";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A section failed validation
    #[error("Invalid {section} configuration: {message}")]
    Invalid {
        /// Section name
        section: &'static str,
        /// What is wrong
        message: String,
    },

    /// Serializing the effective configuration failed
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoding
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM routing
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Route resolution pipeline
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Map display
    #[serde(default)]
    pub map: MapDisplayConfig,
}

impl AppConfig {
    /// Create a configuration suitable for testing
    ///
    /// No caching, no request spacing, short timeouts.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            geocoding: NominatimConfig::for_testing(),
            routing: OsrmConfig::for_testing(),
            pipeline: PipelineConfig::for_testing(),
            map: MapDisplayConfig::for_testing(),
        }
    }

    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path` set, that file must exist. Without it,
    /// `route-explorer.toml` is read if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a section is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., ROUTE_EXPLORER_PIPELINE__VIEWPORT_PADDING_PX)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(?path, "Configuration loaded");
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section that fails validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |section: &'static str| move |message| ConfigError::Invalid { section, message };

        self.geocoding.validate().map_err(invalid("geocoding"))?;
        self.routing.validate().map_err(invalid("routing"))?;
        self.pipeline.validate().map_err(invalid("pipeline"))?;
        self.map.validate().map_err(invalid("map"))?;
        Ok(())
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

//! Minimal host wiring
//!
//! Builds the shared data holder from configuration, sets up the binary
//! sensor platform and exposes the registered entities.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::ports::{ObservationSourcePort, WeatherDataPort};
use application::services::BinarySensorPlatform;
use infrastructure::{AppConfig, InMemoryEntityRegistry, JsonFileObservationSource, SharedWeatherData};
use tracing::{info, warn};

/// Running platform and its registry
#[derive(Debug)]
pub struct Host {
    pub registry: InMemoryEntityRegistry,
    pub registered: usize,
}

impl Host {
    /// Set up the platform for `config`
    ///
    /// `observation` overrides the configured observation file.
    pub async fn start(config: &AppConfig, observation: Option<PathBuf>) -> anyhow::Result<Self> {
        let path = observation
            .or_else(|| config.observation.path.clone())
            .context("no observation file configured (set observation.path or pass --observation)")?;

        let source: Arc<dyn ObservationSourcePort> = Arc::new(JsonFileObservationSource::new(path));
        let data = Arc::new(SharedWeatherData::new(source));
        if let Err(e) = data.refresh().await {
            warn!(error = %e, "Initial observation refresh failed");
        }

        let registry = InMemoryEntityRegistry::new();
        let platform = BinarySensorPlatform::new(data, config.name.clone());
        let registered = platform
            .setup(&config.binary_sensor.conditions(), &registry)
            .await?;
        info!(registered, "Platform ready");

        Ok(Self {
            registry,
            registered,
        })
    }
}

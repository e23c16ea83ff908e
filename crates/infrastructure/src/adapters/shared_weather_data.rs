//! Shared weather data holder - Implements WeatherDataPort
//!
//! Holds the latest station observation for every binary sensor of a
//! station. Refreshing pulls a new observation from the configured source
//! and replaces the snapshot; a failed refresh keeps the previous one.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ObservationSourcePort, WeatherDataPort};
use async_trait::async_trait;
use domain::StationObservation;
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

/// Shared, read-mostly holder of the latest station observation
pub struct SharedWeatherData {
    source: Option<Arc<dyn ObservationSourcePort>>,
    current: RwLock<StationObservation>,
}

impl std::fmt::Debug for SharedWeatherData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedWeatherData")
            .field("source", &self.source.as_ref().map(|s| s.describe()))
            .field("has_reading", &self.current.read().has_reading())
            .finish()
    }
}

impl SharedWeatherData {
    /// Create a holder that refreshes from `source`
    ///
    /// The holder starts without a reading.
    pub fn new(source: Arc<dyn ObservationSourcePort>) -> Self {
        Self {
            source: Some(source),
            current: RwLock::new(StationObservation::empty()),
        }
    }

    /// Create a holder with a fixed observation and no source
    #[must_use]
    pub fn with_observation(observation: StationObservation) -> Self {
        Self {
            source: None,
            current: RwLock::new(observation),
        }
    }

    /// Replace the held observation
    pub fn publish(&self, observation: StationObservation) {
        *self.current.write() = observation;
    }
}

#[async_trait]
impl WeatherDataPort for SharedWeatherData {
    #[instrument(skip(self))]
    async fn refresh(&self) -> Result<(), ApplicationError> {
        let Some(source) = &self.source else {
            debug!("No observation source configured, keeping current observation");
            return Ok(());
        };

        match source.fetch_observation().await {
            Ok(observation) => {
                debug!(
                    timestamp = ?observation.timestamp,
                    raining = ?observation.raining,
                    freezing = ?observation.freezing,
                    "Retrieved station observation"
                );
                self.publish(observation);
                Ok(())
            },
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "Failed to refresh station observation");
                Err(e)
            },
        }
    }

    fn observation(&self) -> StationObservation {
        self.current.read().clone()
    }
}

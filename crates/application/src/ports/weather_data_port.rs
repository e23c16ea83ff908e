//! Weather data port
//!
//! Defines the interface to the shared weather data holder. The holder is
//! owned and refreshed outside the sensors; sensors only read from it and
//! ask it to refresh.

use async_trait::async_trait;
use domain::StationObservation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the shared weather data holder
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherDataPort: Send + Sync {
    /// Refresh the held observation
    ///
    /// Errors come from the holder's data source and are not retried here.
    async fn refresh(&self) -> Result<(), ApplicationError>;

    /// Get the latest observation snapshot
    fn observation(&self) -> StationObservation;

    /// Check whether the holder has produced a reading yet
    fn has_reading(&self) -> bool {
        self.observation().has_reading()
    }
}

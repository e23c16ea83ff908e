//! Observation source port
//!
//! Seam to whatever polls the weather station. The shared data holder pulls
//! fresh observations through this port on refresh.

use async_trait::async_trait;
use domain::StationObservation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching station observations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObservationSourcePort: Send + Sync {
    /// Fetch the station's current observation
    async fn fetch_observation(&self) -> Result<StationObservation, ApplicationError>;

    /// Human-readable source description for logging
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ObservationSourcePort) {}

    #[tokio::test]
    async fn mock_returns_observation() {
        let mut mock = MockObservationSourcePort::new();
        mock.expect_fetch_observation()
            .returning(|| Ok(StationObservation::empty()));

        let obs = mock.fetch_observation().await.unwrap();
        assert!(!obs.has_reading());
    }
}

//! JSON file observation source - Implements ObservationSourcePort
//!
//! Reads the latest station observation from a JSON file written by an
//! external station poller.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::ObservationSourcePort;
use async_trait::async_trait;
use domain::StationObservation;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors reading an observation file
#[derive(Debug, Error)]
pub enum ObservationFileError {
    /// The file does not exist yet
    #[error("Observation file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid observation
    #[error("Invalid observation in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Observation source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileObservationSource {
    path: PathBuf,
}

impl JsonFileObservationSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StationObservation, ObservationFileError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    ObservationFileError::NotFound(self.path.clone())
                } else {
                    ObservationFileError::Read {
                        path: self.path.clone(),
                        source,
                    }
                }
            })?;

        serde_json::from_str(&contents).map_err(|source| ObservationFileError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Map file errors to application errors
    fn map_error(err: ObservationFileError) -> ApplicationError {
        match err {
            ObservationFileError::NotFound(_) => ApplicationError::DataUnavailable(err.to_string()),
            ObservationFileError::Read { .. } | ObservationFileError::Parse { .. } => {
                ApplicationError::ExternalService(err.to_string())
            },
        }
    }
}

#[async_trait]
impl ObservationSourcePort for JsonFileObservationSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_observation(&self) -> Result<StationObservation, ApplicationError> {
        let observation = self.read().await.map_err(Self::map_error)?;
        debug!(has_reading = observation.has_reading(), "Read observation file");
        Ok(observation)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::Condition;

    use super::*;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_observation() {
        let file = write_file(
            r#"{"timestamp":"2024-01-15T12:00:00Z","raining":true,"freezing":null,"temperature":1.5}"#,
        );
        let source = JsonFileObservationSource::new(file.path());

        let obs = source.fetch_observation().await.unwrap();
        assert!(obs.has_reading());
        assert_eq!(obs.condition(Condition::Raining), Some(true));
        assert_eq!(obs.condition(Condition::Freezing), None);
        assert_eq!(obs.temperature, Some(1.5));
    }

    #[tokio::test]
    async fn missing_file_is_data_unavailable() {
        let source = JsonFileObservationSource::new("/nonexistent/observation.json");
        let err = source.fetch_observation().await.unwrap_err();
        assert!(matches!(err, ApplicationError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn invalid_json_is_external_service_error() {
        let file = write_file("{ not json");
        let source = JsonFileObservationSource::new(file.path());

        let err = source.fetch_observation().await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.to_string().contains("Invalid observation"));
    }

    #[test]
    fn describe_includes_path() {
        let source = JsonFileObservationSource::new("/tmp/obs.json");
        assert_eq!(source.describe(), "file:/tmp/obs.json");
        assert_eq!(source.path(), Path::new("/tmp/obs.json"));
    }
}

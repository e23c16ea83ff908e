//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the shared weather
//! data holder, the observation file source and an in-memory host registry.
//! Also loads configuration and initializes logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, BinarySensorPlatformConfig, ObservationSourceConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};

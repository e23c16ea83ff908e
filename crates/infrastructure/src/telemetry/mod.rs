//! Telemetry infrastructure
//!
//! Structured logging through `tracing-subscriber`, human-readable or JSON.

mod logging;

pub use logging::{TelemetryConfig, TelemetryError, init_telemetry};

//! Application layer - Use cases and orchestration
//!
//! Contains the binary sensor adapter, platform setup and the port
//! definitions the host and the weather data holder are reached through.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

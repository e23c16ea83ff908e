//! Domain layer for the SmartWeather binary sensors
//!
//! Contains the weather conditions, their static display metadata and the
//! station observation record shared by every sensor. This layer performs
//! no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

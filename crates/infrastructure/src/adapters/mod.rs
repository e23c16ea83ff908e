//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod in_memory_entity_registry;
mod json_file_observation_source;
mod shared_weather_data;

pub use in_memory_entity_registry::{InMemoryEntityRegistry, RefreshOutcome};
pub use json_file_observation_source::{JsonFileObservationSource, ObservationFileError};
pub use shared_weather_data::SharedWeatherData;

//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod binary_sensor_entity;
mod entity_registry_port;
mod observation_source_port;
mod weather_data_port;

pub use binary_sensor_entity::{BinarySensorEntity, EntitySnapshot};
#[cfg(test)]
pub use entity_registry_port::MockEntityRegistryPort;
pub use entity_registry_port::EntityRegistryPort;
#[cfg(test)]
pub use observation_source_port::MockObservationSourcePort;
pub use observation_source_port::ObservationSourcePort;
#[cfg(test)]
pub use weather_data_port::MockWeatherDataPort;
pub use weather_data_port::WeatherDataPort;

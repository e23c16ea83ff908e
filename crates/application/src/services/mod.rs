//! Application services
//!
//! The weather binary sensor adapter and the platform that creates and
//! registers it.

mod binary_sensor;
mod entity_id;
mod platform;

pub use binary_sensor::{ATTR_ATTRIBUTION, ATTRIBUTION, ENTITY_DOMAIN, WeatherBinarySensor};
pub use entity_id::{EntityIdGenerator, slugify};
pub use platform::BinarySensorPlatform;

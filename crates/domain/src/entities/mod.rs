//! Domain entities - Records describing sensors and station readings

mod condition_descriptor;
mod station_observation;

pub use condition_descriptor::{ConditionDescriptor, descriptor, descriptor_for};
pub use station_observation::StationObservation;

//! Binary sensor entity contract
//!
//! The interface a host automation framework uses to poll and render a
//! binary sensor.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use domain::{BinaryState, DeviceClass};
use serde::Serialize;

use crate::error::ApplicationError;

/// Rendered view of a binary sensor at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySnapshot {
    /// Host entity id, e.g. `binary_sensor.backyard_raining`
    pub entity_id: String,
    /// Display name
    pub name: String,
    /// Current state
    pub state: BinaryState,
    /// Icon for the current state
    pub icon: &'static str,
    /// Device class
    pub device_class: DeviceClass,
    /// Extra state attributes
    pub attributes: BTreeMap<String, String>,
}

/// Binary sensor as seen by the host
#[async_trait]
pub trait BinarySensorEntity: Send + Sync + fmt::Debug {
    /// Host entity id
    fn entity_id(&self) -> &str;

    /// Stable identifier that survives renames
    fn unique_id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Current state
    fn is_on(&self) -> BinaryState;

    /// Icon for the current state
    fn icon(&self) -> &'static str;

    /// Device class
    fn device_class(&self) -> DeviceClass;

    /// Extra state attributes
    fn attributes(&self) -> BTreeMap<String, String>;

    /// Bring the entity's backing data up to date
    async fn refresh(&self) -> Result<(), ApplicationError>;

    /// Capture the current view of the entity
    fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            entity_id: self.entity_id().to_string(),
            name: self.name().to_string(),
            state: self.is_on(),
            icon: self.icon(),
            device_class: self.device_class(),
            attributes: self.attributes(),
        }
    }
}

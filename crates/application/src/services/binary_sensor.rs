//! Weather binary sensor
//!
//! One sensor per monitored condition. A sensor reads its condition off the
//! shared weather data holder and reports it to the host; refreshing is
//! delegated to the holder.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{BinaryState, Condition, ConditionDescriptor, DeviceClass, descriptor};
use tracing::{debug, instrument};

use super::entity_id::slugify;
use crate::error::ApplicationError;
use crate::ports::{BinarySensorEntity, WeatherDataPort};

/// Host domain binary sensors are registered under
pub const ENTITY_DOMAIN: &str = "binary_sensor";

/// Attribute key carrying the data attribution
pub const ATTR_ATTRIBUTION: &str = "attribution";

/// Attribution shown on every sensor
pub const ATTRIBUTION: &str = "Weather data delivered by WeatherFlow";

/// Binary sensor backed by the shared weather data holder
pub struct WeatherBinarySensor {
    descriptor: &'static ConditionDescriptor,
    data: Arc<dyn WeatherDataPort>,
    name: String,
    entity_id: String,
    unique_id: String,
}

impl fmt::Debug for WeatherBinarySensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherBinarySensor")
            .field("condition", &self.descriptor.condition)
            .field("name", &self.name)
            .field("entity_id", &self.entity_id)
            .finish_non_exhaustive()
    }
}

impl WeatherBinarySensor {
    /// Create a sensor for `condition_id`
    ///
    /// The display name is `"{name_prefix} {display name}"`, e.g.
    /// `"SmartWeather Raining"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCondition` (wrapped) if `condition_id`
    /// is not a supported condition.
    pub fn new(
        condition_id: &str,
        data: Arc<dyn WeatherDataPort>,
        name_prefix: &str,
    ) -> Result<Self, ApplicationError> {
        let descriptor = descriptor(condition_id)?;
        let name = format!("{name_prefix} {}", descriptor.display_name);
        let entity_id = format!("{ENTITY_DOMAIN}.{}", slugify(&name));
        let unique_id = format!("{}_{}", slugify(name_prefix), descriptor.id());

        Ok(Self {
            descriptor,
            data,
            name,
            entity_id,
            unique_id,
        })
    }

    /// Replace the generated entity id
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = entity_id.into();
        self
    }

    /// The condition this sensor reports
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.descriptor.condition
    }

    /// The condition's display metadata
    #[must_use]
    pub const fn descriptor(&self) -> &'static ConditionDescriptor {
        self.descriptor
    }

    /// Current value of the condition; `None` until the holder has a reading
    fn reading(&self) -> Option<bool> {
        let observation = self.data.observation();
        if !observation.has_reading() {
            return None;
        }
        observation.condition(self.descriptor.condition)
    }
}

#[async_trait]
impl BinarySensorEntity for WeatherBinarySensor {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_on(&self) -> BinaryState {
        BinaryState::from(self.reading())
    }

    fn icon(&self) -> &'static str {
        self.descriptor.icon(self.reading())
    }

    fn device_class(&self) -> DeviceClass {
        self.descriptor.device_class
    }

    fn attributes(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(ATTR_ATTRIBUTION.to_string(), ATTRIBUTION.to_string())])
    }

    #[instrument(skip(self), fields(entity_id = %self.entity_id))]
    async fn refresh(&self) -> Result<(), ApplicationError> {
        self.data.refresh().await?;
        debug!(state = %self.is_on(), "Refreshed binary sensor");
        Ok(())
    }
}

//! Binary sensor platform setup
//!
//! Creates one sensor per monitored condition and registers them with the
//! host. Setup does nothing until the shared data holder has produced its
//! first reading.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::binary_sensor::{ENTITY_DOMAIN, WeatherBinarySensor};
use super::entity_id::EntityIdGenerator;
use crate::error::ApplicationError;
use crate::ports::{BinarySensorEntity, EntityRegistryPort, WeatherDataPort};

/// Sets up the weather binary sensors for one station
pub struct BinarySensorPlatform {
    data: Arc<dyn WeatherDataPort>,
    name_prefix: String,
}

impl std::fmt::Debug for BinarySensorPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinarySensorPlatform")
            .field("name_prefix", &self.name_prefix)
            .finish_non_exhaustive()
    }
}

impl BinarySensorPlatform {
    /// Create a platform over a shared data holder
    pub fn new(data: Arc<dyn WeatherDataPort>, name_prefix: impl Into<String>) -> Self {
        Self {
            data,
            name_prefix: name_prefix.into(),
        }
    }

    /// Display-name prefix for every sensor
    #[must_use]
    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    /// Build one sensor per condition id, allocating unique entity ids
    ///
    /// # Errors
    ///
    /// Returns an unknown-condition error for the first unsupported id.
    pub fn build_sensors<S: AsRef<str>>(
        &self,
        condition_ids: &[S],
        ids: &mut EntityIdGenerator,
    ) -> Result<Vec<WeatherBinarySensor>, ApplicationError> {
        condition_ids
            .iter()
            .map(|id| -> Result<WeatherBinarySensor, ApplicationError> {
                let sensor =
                    WeatherBinarySensor::new(id.as_ref(), Arc::clone(&self.data), &self.name_prefix)?;
                let entity_id = ids.generate(ENTITY_DOMAIN, sensor.name());
                debug!(condition = id.as_ref(), entity_id = %entity_id, "Binary sensor added");
                Ok(sensor.with_entity_id(entity_id))
            })
            .collect()
    }

    /// Create the sensors and register them with the host
    ///
    /// Returns the number of registered sensors. Nothing is registered while
    /// the data holder has no reading.
    ///
    /// # Errors
    ///
    /// Returns an unknown-condition error if any id is unsupported (nothing
    /// is registered in that case), or the registry's error.
    #[instrument(skip(self, condition_ids, registry), fields(prefix = %self.name_prefix))]
    pub async fn setup<S: AsRef<str> + Sync>(
        &self,
        condition_ids: &[S],
        registry: &dyn EntityRegistryPort,
    ) -> Result<usize, ApplicationError> {
        if !self.data.has_reading() {
            warn!("Weather data has no reading yet, skipping binary sensor setup");
            return Ok(0);
        }

        let mut ids = EntityIdGenerator::with_taken(registry.registered_entity_ids());
        let sensors = self.build_sensors(condition_ids, &mut ids)?;
        if sensors.is_empty() {
            info!("No conditions monitored");
            return Ok(0);
        }

        let count = sensors.len();
        let entities: Vec<Arc<dyn BinarySensorEntity>> = sensors
            .into_iter()
            .map(|sensor| Arc::new(sensor) as Arc<dyn BinarySensorEntity>)
            .collect();
        registry.add_entities(entities, true).await?;

        info!(count, "Registered weather binary sensors");
        Ok(count)
    }
}

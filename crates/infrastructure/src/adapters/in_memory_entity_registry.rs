//! In-memory entity registry - Implements EntityRegistryPort
//!
//! Minimal host: keeps registered entities in memory and drives their
//! refresh cycle.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{BinarySensorEntity, EntityRegistryPort, EntitySnapshot};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

/// Outcome of refreshing one entity
#[derive(Debug)]
pub struct RefreshOutcome {
    /// The refreshed entity
    pub entity_id: String,
    /// Refresh result
    pub result: Result<(), ApplicationError>,
}

/// Entity registry that keeps entities in memory
#[derive(Debug, Default)]
pub struct InMemoryEntityRegistry {
    entities: RwLock<Vec<Arc<dyn BinarySensorEntity>>>,
}

impl InMemoryEntityRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered entities, in registration order
    #[must_use]
    pub fn entities(&self) -> Vec<Arc<dyn BinarySensorEntity>> {
        self.entities.read().clone()
    }

    /// Number of registered entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    /// Check whether no entity is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }

    /// Refresh every entity once, in registration order
    ///
    /// Failures are reported per entity; one failing entity does not stop
    /// the others from refreshing.
    #[instrument(skip(self))]
    pub async fn refresh_all(&self) -> Vec<RefreshOutcome> {
        let entities = self.entities();
        let mut outcomes = Vec::with_capacity(entities.len());
        for entity in entities {
            let result = entity.refresh().await;
            if let Err(e) = &result {
                warn!(entity_id = entity.entity_id(), error = %e, "Entity refresh failed");
            }
            outcomes.push(RefreshOutcome {
                entity_id: entity.entity_id().to_string(),
                result,
            });
        }
        outcomes
    }

    /// Current view of every entity
    #[must_use]
    pub fn snapshots(&self) -> Vec<EntitySnapshot> {
        self.entities
            .read()
            .iter()
            .map(|entity| entity.snapshot())
            .collect()
    }
}

#[async_trait]
impl EntityRegistryPort for InMemoryEntityRegistry {
    #[instrument(skip(self, entities), fields(count = entities.len()))]
    async fn add_entities(
        &self,
        entities: Vec<Arc<dyn BinarySensorEntity>>,
        update_before_add: bool,
    ) -> Result<(), ApplicationError> {
        if update_before_add {
            for entity in &entities {
                if let Err(e) = entity.refresh().await {
                    warn!(
                        entity_id = entity.entity_id(),
                        error = %e,
                        "Initial refresh failed, adding entity anyway"
                    );
                }
            }
        }

        let mut registered = self.entities.write();
        for entity in entities {
            debug!(entity_id = entity.entity_id(), "Entity registered");
            registered.push(entity);
        }
        Ok(())
    }

    fn registered_entity_ids(&self) -> Vec<String> {
        self.entities
            .read()
            .iter()
            .map(|entity| entity.entity_id().to_string())
            .collect()
    }
}

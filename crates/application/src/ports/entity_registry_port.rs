//! Entity registry port
//!
//! Host-side sink that platform setup hands its entities to.

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::BinarySensorEntity;
use crate::error::ApplicationError;

/// Port for registering entities with the host
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EntityRegistryPort: Send + Sync {
    /// Register entities with the host
    ///
    /// When `update_before_add` is set, the host refreshes every entity once
    /// before it first reads their state.
    async fn add_entities(
        &self,
        entities: Vec<Arc<dyn BinarySensorEntity>>,
        update_before_add: bool,
    ) -> Result<(), ApplicationError>;

    /// Entity ids the host already uses
    fn registered_entity_ids(&self) -> Vec<String>;
}

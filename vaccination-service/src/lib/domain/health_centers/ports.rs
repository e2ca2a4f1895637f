use async_trait::async_trait;
use uuid::Uuid;

use super::models::CreateHealthCenterCommand;
use super::models::HealthCenter;
use crate::domain::errors::StoreError;

/// Persistence operations for health centers.
#[async_trait]
pub trait HealthCenterStore: Send + Sync + 'static {
    async fn create(&self, command: CreateHealthCenterCommand)
        -> Result<HealthCenter, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HealthCenter>, StoreError>;

    async fn list(&self) -> Result<Vec<HealthCenter>, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        command: CreateHealthCenterCommand,
    ) -> Result<HealthCenter, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use super::models::CreateVaccineLotCommand;
use super::models::VaccineLot;
use crate::domain::errors::StoreError;

/// Persistence operations for vaccine lots.
#[async_trait]
pub trait VaccineLotStore: Send + Sync + 'static {
    async fn create(&self, command: CreateVaccineLotCommand) -> Result<VaccineLot, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VaccineLot>, StoreError>;

    async fn list(&self) -> Result<Vec<VaccineLot>, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        command: CreateVaccineLotCommand,
    ) -> Result<VaccineLot, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use super::models::CreateVaccineCommand;
use super::models::Vaccine;
use crate::domain::errors::StoreError;

/// Persistence operations for the vaccine catalog.
#[async_trait]
pub trait VaccineStore: Send + Sync + 'static {
    async fn create(&self, command: CreateVaccineCommand) -> Result<Vaccine, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, StoreError>;

    async fn list(&self) -> Result<Vec<Vaccine>, StoreError>;

    async fn update(&self, id: Uuid, command: CreateVaccineCommand) -> Result<Vaccine, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

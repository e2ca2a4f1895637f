use async_trait::async_trait;
use uuid::Uuid;

use super::models::CreateVaccinationCommand;
use super::models::Vaccination;
use crate::domain::errors::StoreError;

/// Persistence operations for vaccination events.
///
/// Stock and scheme checks (lot depleted, lot expired, duplicate dose) are
/// enforced by the stored procedures and surface as `Constraint` errors.
#[async_trait]
pub trait VaccinationStore: Send + Sync + 'static {
    async fn create(&self, command: CreateVaccinationCommand) -> Result<Vaccination, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccination>, StoreError>;

    async fn list(&self) -> Result<Vec<Vaccination>, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        command: CreateVaccinationCommand,
    ) -> Result<Vaccination, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

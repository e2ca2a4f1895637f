use async_trait::async_trait;
use uuid::Uuid;

use super::models::Appointment;
use super::models::CreateAppointmentCommand;
use super::models::UpdateAppointmentCommand;
use crate::domain::errors::StoreError;

/// Persistence operations for appointments.
#[async_trait]
pub trait AppointmentStore: Send + Sync + 'static {
    async fn create(&self, command: CreateAppointmentCommand) -> Result<Appointment, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError>;

    async fn list(&self) -> Result<Vec<Appointment>, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        command: UpdateAppointmentCommand,
    ) -> Result<Appointment, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

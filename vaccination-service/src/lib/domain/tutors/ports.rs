use async_trait::async_trait;
use uuid::Uuid;

use super::models::CreateTutorCommand;
use super::models::Tutor;
use crate::domain::errors::StoreError;

/// Persistence operations for tutors.
#[async_trait]
pub trait TutorStore: Send + Sync + 'static {
    async fn create(&self, command: CreateTutorCommand) -> Result<Tutor, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tutor>, StoreError>;

    async fn list(&self) -> Result<Vec<Tutor>, StoreError>;

    async fn update(&self, id: Uuid, command: CreateTutorCommand) -> Result<Tutor, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use super::models::Child;
use super::models::CreateChildCommand;
use crate::domain::errors::StoreError;

/// Persistence operations for children.
#[async_trait]
pub trait ChildStore: Send + Sync + 'static {
    async fn create(&self, command: CreateChildCommand) -> Result<Child, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Child>, StoreError>;

    async fn list(&self) -> Result<Vec<Child>, StoreError>;

    async fn update(&self, id: Uuid, command: CreateChildCommand) -> Result<Child, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

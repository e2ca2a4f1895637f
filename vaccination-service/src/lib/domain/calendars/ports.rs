use async_trait::async_trait;
use uuid::Uuid;

use super::models::CalendarEntry;
use super::models::CreateCalendarEntryCommand;
use crate::domain::errors::StoreError;

/// Persistence operations for vaccination calendar entries.
#[async_trait]
pub trait CalendarStore: Send + Sync + 'static {
    async fn create(
        &self,
        command: CreateCalendarEntryCommand,
    ) -> Result<CalendarEntry, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CalendarEntry>, StoreError>;

    async fn list(&self) -> Result<Vec<CalendarEntry>, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        command: CreateCalendarEntryCommand,
    ) -> Result<CalendarEntry, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

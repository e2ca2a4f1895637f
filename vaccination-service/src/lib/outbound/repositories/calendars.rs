use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::calendars::models::CalendarEntry;
use crate::domain::calendars::models::CreateCalendarEntryCommand;
use crate::domain::calendars::ports::CalendarStore;
use crate::domain::errors::StoreError;

pub struct PostgresCalendarStore {
    pool: PgPool,
}

impl PostgresCalendarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn entry_from_row(row: &PgRow) -> Result<CalendarEntry, StoreError> {
    Ok(CalendarEntry {
        id: row.try_get("id")?,
        country_id: row.try_get("country_id")?,
        vaccine_id: row.try_get("vaccine_id")?,
        dose_number: row.try_get("dose_number")?,
        recommended_age_months: row.try_get("recommended_age_months")?,
    })
}

#[async_trait]
impl CalendarStore for PostgresCalendarStore {
    async fn create(
        &self,
        command: CreateCalendarEntryCommand,
    ) -> Result<CalendarEntry, StoreError> {
        let row = sqlx::query(
            "SELECT id, country_id, vaccine_id, dose_number, recommended_age_months \
             FROM sp_create_calendar_entry($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(command.country_id)
        .bind(command.vaccine_id)
        .bind(command.dose_number)
        .bind(command.recommended_age_months)
        .fetch_one(&self.pool)
        .await?;

        entry_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CalendarEntry>, StoreError> {
        let row = sqlx::query(
            "SELECT id, country_id, vaccine_id, dose_number, recommended_age_months \
             FROM sp_get_calendar_entry($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(entry_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<CalendarEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, country_id, vaccine_id, dose_number, recommended_age_months \
             FROM sp_list_calendar_entries()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateCalendarEntryCommand,
    ) -> Result<CalendarEntry, StoreError> {
        let row = sqlx::query(
            "SELECT id, country_id, vaccine_id, dose_number, recommended_age_months \
             FROM sp_update_calendar_entry($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(command.country_id)
        .bind(command.vaccine_id)
        .bind(command.dose_number)
        .bind(command.recommended_age_months)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Calendar entry {id}")))?;

        entry_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_calendar_entry($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Calendar entry {id}")))
    }
}

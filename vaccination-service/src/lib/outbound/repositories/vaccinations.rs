use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::vaccinations::models::CreateVaccinationCommand;
use crate::domain::vaccinations::models::Vaccination;
use crate::domain::vaccinations::ports::VaccinationStore;

/// Vaccination events backed by stored procedures. The create procedure
/// also decrements the referenced lot's stock; depletion, expiry, and
/// duplicate-dose rules surface as domain constraint errors.
pub struct PostgresVaccinationStore {
    pool: PgPool,
}

impl PostgresVaccinationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn vaccination_from_row(row: &PgRow) -> Result<Vaccination, StoreError> {
    Ok(Vaccination {
        id: row.try_get("id")?,
        child_id: row.try_get("child_id")?,
        lot_id: row.try_get("lot_id")?,
        dose_number: row.try_get("dose_number")?,
        applied_by: row.try_get("applied_by")?,
        applied_at: row.try_get("applied_at")?,
    })
}

#[async_trait]
impl VaccinationStore for PostgresVaccinationStore {
    async fn create(&self, command: CreateVaccinationCommand) -> Result<Vaccination, StoreError> {
        let row = sqlx::query(
            "SELECT id, child_id, lot_id, dose_number, applied_by, applied_at \
             FROM sp_create_vaccination($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(command.child_id)
        .bind(command.lot_id)
        .bind(command.dose_number)
        .bind(command.applied_by)
        .bind(command.applied_at)
        .fetch_one(&self.pool)
        .await?;

        vaccination_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccination>, StoreError> {
        let row = sqlx::query(
            "SELECT id, child_id, lot_id, dose_number, applied_by, applied_at \
             FROM sp_get_vaccination($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(vaccination_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Vaccination>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, child_id, lot_id, dose_number, applied_by, applied_at \
             FROM sp_list_vaccinations()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(vaccination_from_row).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateVaccinationCommand,
    ) -> Result<Vaccination, StoreError> {
        let row = sqlx::query(
            "SELECT id, child_id, lot_id, dose_number, applied_by, applied_at \
             FROM sp_update_vaccination($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(command.child_id)
        .bind(command.lot_id)
        .bind(command.dose_number)
        .bind(command.applied_by)
        .bind(command.applied_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Vaccination {id}")))?;

        vaccination_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_vaccination($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Vaccination {id}")))
    }
}

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::vaccines::models::CreateVaccineCommand;
use crate::domain::vaccines::models::Vaccine;
use crate::domain::vaccines::ports::VaccineStore;

pub struct PostgresVaccineStore {
    pool: PgPool,
}

impl PostgresVaccineStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn vaccine_from_row(row: &PgRow) -> Result<Vaccine, StoreError> {
    Ok(Vaccine {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        disease: row.try_get("disease")?,
        doses_required: row.try_get("doses_required")?,
    })
}

#[async_trait]
impl VaccineStore for PostgresVaccineStore {
    async fn create(&self, command: CreateVaccineCommand) -> Result<Vaccine, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, disease, doses_required \
             FROM sp_create_vaccine($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(&command.name)
        .bind(&command.disease)
        .bind(command.doses_required)
        .fetch_one(&self.pool)
        .await?;

        vaccine_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, StoreError> {
        let row = sqlx::query("SELECT id, name, disease, doses_required FROM sp_get_vaccine($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(vaccine_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Vaccine>, StoreError> {
        let rows = sqlx::query("SELECT id, name, disease, doses_required FROM sp_list_vaccines()")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(vaccine_from_row).collect()
    }

    async fn update(&self, id: Uuid, command: CreateVaccineCommand) -> Result<Vaccine, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, disease, doses_required \
             FROM sp_update_vaccine($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(&command.name)
        .bind(&command.disease)
        .bind(command.doses_required)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Vaccine {id}")))?;

        vaccine_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_vaccine($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Vaccine {id}")))
    }
}

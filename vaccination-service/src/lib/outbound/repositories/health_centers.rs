use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::health_centers::models::CreateHealthCenterCommand;
use crate::domain::health_centers::models::HealthCenter;
use crate::domain::health_centers::ports::HealthCenterStore;

pub struct PostgresHealthCenterStore {
    pool: PgPool,
}

impl PostgresHealthCenterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn health_center_from_row(row: &PgRow) -> Result<HealthCenter, StoreError> {
    Ok(HealthCenter {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        country_id: row.try_get("country_id")?,
    })
}

#[async_trait]
impl HealthCenterStore for PostgresHealthCenterStore {
    async fn create(
        &self,
        command: CreateHealthCenterCommand,
    ) -> Result<HealthCenter, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, address, country_id \
             FROM sp_create_health_center($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(&command.name)
        .bind(&command.address)
        .bind(command.country_id)
        .fetch_one(&self.pool)
        .await?;

        health_center_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HealthCenter>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, address, country_id FROM sp_get_health_center($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(health_center_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<HealthCenter>, StoreError> {
        let rows = sqlx::query("SELECT id, name, address, country_id FROM sp_list_health_centers()")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(health_center_from_row).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateHealthCenterCommand,
    ) -> Result<HealthCenter, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, address, country_id \
             FROM sp_update_health_center($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(&command.name)
        .bind(&command.address)
        .bind(command.country_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Health center {id}")))?;

        health_center_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_health_center($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Health center {id}")))
    }
}

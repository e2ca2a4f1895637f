use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::countries::models::Country;
use crate::domain::countries::models::CountryCode;
use crate::domain::countries::models::CreateCountryCommand;
use crate::domain::countries::ports::CountryStore;
use crate::domain::errors::StoreError;

pub struct PostgresCountryStore {
    pool: PgPool,
}

impl PostgresCountryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn country_from_row(row: &PgRow) -> Result<Country, StoreError> {
    let iso_code: String = row.try_get("iso_code")?;

    Ok(Country {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        iso_code: CountryCode::new(iso_code)
            .map_err(|e| StoreError::Database(format!("Corrupt country row: {e}")))?,
    })
}

#[async_trait]
impl CountryStore for PostgresCountryStore {
    async fn create(&self, command: CreateCountryCommand) -> Result<Country, StoreError> {
        let row = sqlx::query("SELECT id, name, iso_code FROM sp_create_country($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(&command.name)
            .bind(command.iso_code.as_str())
            .fetch_one(&self.pool)
            .await?;

        country_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, StoreError> {
        let row = sqlx::query("SELECT id, name, iso_code FROM sp_get_country($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(country_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Country>, StoreError> {
        let rows = sqlx::query("SELECT id, name, iso_code FROM sp_list_countries()")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(country_from_row).collect()
    }

    async fn update(&self, id: Uuid, command: CreateCountryCommand) -> Result<Country, StoreError> {
        let row = sqlx::query("SELECT id, name, iso_code FROM sp_update_country($1, $2, $3)")
            .bind(id)
            .bind(&command.name)
            .bind(command.iso_code.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Country {id}")))?;

        country_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_country($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Country {id}")))
    }
}

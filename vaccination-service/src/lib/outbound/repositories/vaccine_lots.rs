use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::vaccine_lots::models::CreateVaccineLotCommand;
use crate::domain::vaccine_lots::models::VaccineLot;
use crate::domain::vaccine_lots::ports::VaccineLotStore;

pub struct PostgresVaccineLotStore {
    pool: PgPool,
}

impl PostgresVaccineLotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn lot_from_row(row: &PgRow) -> Result<VaccineLot, StoreError> {
    Ok(VaccineLot {
        id: row.try_get("id")?,
        vaccine_id: row.try_get("vaccine_id")?,
        lot_number: row.try_get("lot_number")?,
        expiration_date: row.try_get("expiration_date")?,
        quantity: row.try_get("quantity")?,
    })
}

#[async_trait]
impl VaccineLotStore for PostgresVaccineLotStore {
    async fn create(&self, command: CreateVaccineLotCommand) -> Result<VaccineLot, StoreError> {
        let row = sqlx::query(
            "SELECT id, vaccine_id, lot_number, expiration_date, quantity \
             FROM sp_create_vaccine_lot($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(command.vaccine_id)
        .bind(&command.lot_number)
        .bind(command.expiration_date)
        .bind(command.quantity)
        .fetch_one(&self.pool)
        .await?;

        lot_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VaccineLot>, StoreError> {
        let row = sqlx::query(
            "SELECT id, vaccine_id, lot_number, expiration_date, quantity \
             FROM sp_get_vaccine_lot($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(lot_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<VaccineLot>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, vaccine_id, lot_number, expiration_date, quantity \
             FROM sp_list_vaccine_lots()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(lot_from_row).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateVaccineLotCommand,
    ) -> Result<VaccineLot, StoreError> {
        let row = sqlx::query(
            "SELECT id, vaccine_id, lot_number, expiration_date, quantity \
             FROM sp_update_vaccine_lot($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(command.vaccine_id)
        .bind(&command.lot_number)
        .bind(command.expiration_date)
        .bind(command.quantity)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Vaccine lot {id}")))?;

        lot_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_vaccine_lot($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Vaccine lot {id}")))
    }
}

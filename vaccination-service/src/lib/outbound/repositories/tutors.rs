use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::tutors::models::CreateTutorCommand;
use crate::domain::tutors::models::EmailAddress;
use crate::domain::tutors::models::Tutor;
use crate::domain::tutors::ports::TutorStore;

pub struct PostgresTutorStore {
    pool: PgPool,
}

impl PostgresTutorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn tutor_from_row(row: &PgRow) -> Result<Tutor, StoreError> {
    let email: String = row.try_get("email")?;

    Ok(Tutor {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        document_id: row.try_get("document_id")?,
        email: EmailAddress::new(email)
            .map_err(|e| StoreError::Database(format!("Corrupt tutor row: {e}")))?,
        phone: row.try_get("phone")?,
    })
}

#[async_trait]
impl TutorStore for PostgresTutorStore {
    async fn create(&self, command: CreateTutorCommand) -> Result<Tutor, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, document_id, email, phone \
             FROM sp_create_tutor($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(&command.first_name)
        .bind(&command.last_name)
        .bind(&command.document_id)
        .bind(command.email.as_str())
        .bind(&command.phone)
        .fetch_one(&self.pool)
        .await?;

        tutor_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tutor>, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, document_id, email, phone FROM sp_get_tutor($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(tutor_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Tutor>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, document_id, email, phone FROM sp_list_tutors()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(tutor_from_row).collect()
    }

    async fn update(&self, id: Uuid, command: CreateTutorCommand) -> Result<Tutor, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, document_id, email, phone \
             FROM sp_update_tutor($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(&command.first_name)
        .bind(&command.last_name)
        .bind(&command.document_id)
        .bind(command.email.as_str())
        .bind(&command.phone)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Tutor {id}")))?;

        tutor_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_tutor($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Tutor {id}")))
    }
}

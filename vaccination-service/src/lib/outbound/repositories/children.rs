use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::children::models::Child;
use crate::domain::children::models::CreateChildCommand;
use crate::domain::children::models::Gender;
use crate::domain::children::ports::ChildStore;
use crate::domain::errors::StoreError;

pub struct PostgresChildStore {
    pool: PgPool,
}

impl PostgresChildStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn child_from_row(row: &PgRow) -> Result<Child, StoreError> {
    let gender: String = row.try_get("gender")?;

    Ok(Child {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        birth_date: row.try_get("birth_date")?,
        gender: gender
            .parse::<Gender>()
            .map_err(|e| StoreError::Database(format!("Corrupt child row: {e}")))?,
        tutor_id: row.try_get("tutor_id")?,
        health_center_id: row.try_get("health_center_id")?,
    })
}

#[async_trait]
impl ChildStore for PostgresChildStore {
    async fn create(&self, command: CreateChildCommand) -> Result<Child, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, birth_date, gender, tutor_id, health_center_id \
             FROM sp_create_child($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(&command.first_name)
        .bind(&command.last_name)
        .bind(command.birth_date)
        .bind(command.gender.as_str())
        .bind(command.tutor_id)
        .bind(command.health_center_id)
        .fetch_one(&self.pool)
        .await?;

        child_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Child>, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, birth_date, gender, tutor_id, health_center_id \
             FROM sp_get_child($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(child_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Child>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, birth_date, gender, tutor_id, health_center_id \
             FROM sp_list_children()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(child_from_row).collect()
    }

    async fn update(&self, id: Uuid, command: CreateChildCommand) -> Result<Child, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, birth_date, gender, tutor_id, health_center_id \
             FROM sp_update_child($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&command.first_name)
        .bind(&command.last_name)
        .bind(command.birth_date)
        .bind(command.gender.as_str())
        .bind(command.tutor_id)
        .bind(command.health_center_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Child {id}")))?;

        child_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_child($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Child {id}")))
    }
}

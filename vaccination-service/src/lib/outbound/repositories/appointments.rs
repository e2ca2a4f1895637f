use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::appointments::models::Appointment;
use crate::domain::appointments::models::AppointmentStatus;
use crate::domain::appointments::models::CreateAppointmentCommand;
use crate::domain::appointments::models::UpdateAppointmentCommand;
use crate::domain::appointments::ports::AppointmentStore;
use crate::domain::errors::StoreError;

pub struct PostgresAppointmentStore {
    pool: PgPool,
}

impl PostgresAppointmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn appointment_from_row(row: &PgRow) -> Result<Appointment, StoreError> {
    let status: String = row.try_get("status")?;

    Ok(Appointment {
        id: row.try_get("id")?,
        child_id: row.try_get("child_id")?,
        health_center_id: row.try_get("health_center_id")?,
        scheduled_at: row.try_get("scheduled_at")?,
        status: status
            .parse::<AppointmentStatus>()
            .map_err(|e| StoreError::Database(format!("Corrupt appointment row: {e}")))?,
    })
}

#[async_trait]
impl AppointmentStore for PostgresAppointmentStore {
    async fn create(&self, command: CreateAppointmentCommand) -> Result<Appointment, StoreError> {
        let row = sqlx::query(
            "SELECT id, child_id, health_center_id, scheduled_at, status \
             FROM sp_create_appointment($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(command.child_id)
        .bind(command.health_center_id)
        .bind(command.scheduled_at)
        .bind(AppointmentStatus::Pendiente.as_str())
        .fetch_one(&self.pool)
        .await?;

        appointment_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        let row = sqlx::query(
            "SELECT id, child_id, health_center_id, scheduled_at, status \
             FROM sp_get_appointment($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(appointment_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Appointment>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, child_id, health_center_id, scheduled_at, status \
             FROM sp_list_appointments()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(appointment_from_row).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        command: UpdateAppointmentCommand,
    ) -> Result<Appointment, StoreError> {
        let row = sqlx::query(
            "SELECT id, child_id, health_center_id, scheduled_at, status \
             FROM sp_update_appointment($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(command.child_id)
        .bind(command.health_center_id)
        .bind(command.scheduled_at)
        .bind(command.status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Appointment {id}")))?;

        appointment_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM sp_delete_appointment($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Appointment {id}")))
    }
}

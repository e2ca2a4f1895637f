use async_trait::async_trait;
use auth::Role;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::errors::StoreError;
use crate::domain::principal::models::AccountStatus;
use crate::domain::principal::models::StoredCredential;
use crate::domain::principal::ports::CredentialStore;

/// Credential lookup backed by the `sp_authenticate_user` stored
/// procedure. The procedure returns at most one row for a username match;
/// password verification happens in the service, never in SQL.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn credential_from_row(row: &PgRow) -> Result<StoredCredential, StoreError> {
    let role: String = row.try_get("role")?;
    let status: String = row.try_get("status")?;

    Ok(StoredCredential {
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        role: role
            .parse::<Role>()
            .map_err(|e| StoreError::Database(format!("Corrupt credential row: {e}")))?,
        status: status
            .parse::<AccountStatus>()
            .map_err(|e| StoreError::Database(format!("Corrupt credential row: {e}")))?,
    })
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredential>, StoreError> {
        let row = sqlx::query(
            "SELECT user_id, username, password_hash, role, status \
             FROM sp_authenticate_user($1)",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(credential_from_row).transpose()
    }
}

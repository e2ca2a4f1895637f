use async_trait::async_trait;

use super::models::StoredCredential;
use crate::domain::errors::StoreError;

/// Read-only access to stored credentials.
///
/// User provisioning happens out-of-band; this backend only authenticates
/// against what is already there.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Look up the credential for a username (case-sensitive).
    ///
    /// # Returns
    /// The stored credential, or None when the username is unknown
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn find_by_username(&self, username: &str)
        -> Result<Option<StoredCredential>, StoreError>;
}

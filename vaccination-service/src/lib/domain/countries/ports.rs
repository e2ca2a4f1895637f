use async_trait::async_trait;
use uuid::Uuid;

use super::models::Country;
use super::models::CreateCountryCommand;
use crate::domain::errors::StoreError;

/// Persistence operations for countries.
#[async_trait]
pub trait CountryStore: Send + Sync + 'static {
    /// Persist a new country and return it with its generated id.
    async fn create(&self, command: CreateCountryCommand) -> Result<Country, StoreError>;

    /// Retrieve a country by id, None when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, StoreError>;

    /// Retrieve all countries.
    async fn list(&self) -> Result<Vec<Country>, StoreError>;

    /// Replace every field of an existing country.
    ///
    /// # Errors
    /// * `NotFound` - No country with this id
    async fn update(&self, id: Uuid, command: CreateCountryCommand) -> Result<Country, StoreError>;

    /// Remove a country.
    ///
    /// # Errors
    /// * `NotFound` - No country with this id
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

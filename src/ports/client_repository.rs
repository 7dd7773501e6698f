//! Client repository port.
//!
//! Implementations must enforce the unique `national_id` and `email`
//! constraints atomically at write time: two concurrent creates for the
//! same key must not both succeed.

use async_trait::async_trait;

use crate::domain::client::{Client, NationalId};
use crate::domain::foundation::{ClientId, DomainError};

/// Query filter for client listings. Criteria combine with AND, except
/// `search`, which matches a substring of the first OR last name.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub active: Option<bool>,
    pub national_id: Option<String>,
    /// Case-insensitive substring, first OR last name.
    pub search: Option<String>,
    /// Calendar month of the birth date (1-12).
    pub birth_month: Option<u32>,
}

/// Repository port for client persistence.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Persists a new client.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` when the national ID or email is already taken
    /// - `StorageError` on persistence failure
    async fn create(&self, client: &Client) -> Result<(), DomainError>;

    /// Replaces an existing client, re-checking the unique keys against
    /// every other record.
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` when the client does not exist
    /// - `DuplicateKey` when the new national ID or email collides
    async fn update(&self, client: &Client) -> Result<(), DomainError>;

    /// Finds a client by ID. Returns `None` when absent.
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError>;

    /// Finds a client by national ID. Returns `None` when absent.
    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<Client>, DomainError>;

    /// Lists clients matching the filter, ordered by registration time.
    async fn list(&self, filter: &ClientFilter) -> Result<Vec<Client>, DomainError>;
}

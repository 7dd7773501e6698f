//! Fingerprint repository port. One fingerprint per client.

use async_trait::async_trait;

use crate::domain::client::Fingerprint;
use crate::domain::foundation::{ClientId, DomainError, FingerprintId};

/// Query filter for fingerprint listings.
#[derive(Debug, Clone, Default)]
pub struct FingerprintFilter {
    pub client_id: Option<ClientId>,
    pub active: Option<bool>,
}

/// Repository port for fingerprint persistence.
#[async_trait]
pub trait FingerprintRepository: Send + Sync {
    /// Persists a new fingerprint.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when the client already has a fingerprint enrolled.
    async fn create(&self, fingerprint: &Fingerprint) -> Result<(), DomainError>;

    /// Replaces an existing fingerprint record.
    async fn update(&self, fingerprint: &Fingerprint) -> Result<(), DomainError>;

    /// Finds a fingerprint by ID.
    async fn find_by_id(&self, id: &FingerprintId) -> Result<Option<Fingerprint>, DomainError>;

    /// Finds the fingerprint enrolled for a client, if any.
    async fn find_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<Fingerprint>, DomainError>;

    /// Lists fingerprints matching the filter.
    async fn list(&self, filter: &FingerprintFilter) -> Result<Vec<Fingerprint>, DomainError>;
}

//! Fingerprint enrollment use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::client::Fingerprint;
use crate::domain::foundation::{ClientId, DomainError, ErrorCode, FingerprintId};
use crate::ports::{ClientRepository, FingerprintFilter, FingerprintRepository};

use super::super::shared::require_client;

/// Command to enroll a fingerprint template for a client.
#[derive(Debug, Clone)]
pub struct EnrollFingerprintCommand {
    pub client_id: ClientId,
    pub template: Vec<u8>,
    pub enrolled_at: DateTime<Utc>,
}

/// Handler for fingerprint enrollment. The one-per-client rule is
/// enforced by the repository's unique key on `client_id`.
pub struct EnrollFingerprintHandler {
    fingerprints: Arc<dyn FingerprintRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl EnrollFingerprintHandler {
    pub fn new(
        fingerprints: Arc<dyn FingerprintRepository>,
        clients: Arc<dyn ClientRepository>,
    ) -> Self {
        Self {
            fingerprints,
            clients,
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(client_id = %cmd.client_id))]
    pub async fn handle(&self, cmd: EnrollFingerprintCommand) -> Result<Fingerprint, DomainError> {
        let client = require_client(self.clients.as_ref(), &cmd.client_id).await?;
        let fingerprint =
            Fingerprint::enroll(FingerprintId::new(), client.id, cmd.template, cmd.enrolled_at)?;
        self.fingerprints.create(&fingerprint).await?;
        tracing::info!(fingerprint_id = %fingerprint.id, "fingerprint enrolled");
        Ok(fingerprint)
    }
}

/// Handler for deactivating a fingerprint ahead of re-enrollment.
pub struct DeactivateFingerprintHandler {
    fingerprints: Arc<dyn FingerprintRepository>,
}

impl DeactivateFingerprintHandler {
    pub fn new(fingerprints: Arc<dyn FingerprintRepository>) -> Self {
        Self { fingerprints }
    }

    pub async fn handle(&self, id: FingerprintId) -> Result<Fingerprint, DomainError> {
        let mut fingerprint = self.fingerprints.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::FingerprintNotFound, "Fingerprint not found")
        })?;
        fingerprint.deactivate();
        self.fingerprints.update(&fingerprint).await?;
        Ok(fingerprint)
    }
}

/// Handler for listing enrolled fingerprints.
pub struct ListFingerprintsHandler {
    fingerprints: Arc<dyn FingerprintRepository>,
}

impl ListFingerprintsHandler {
    pub fn new(fingerprints: Arc<dyn FingerprintRepository>) -> Self {
        Self { fingerprints }
    }

    pub async fn handle(&self, filter: FingerprintFilter) -> Result<Vec<Fingerprint>, DomainError> {
        self.fingerprints.list(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientStore, InMemoryFingerprintStore};
    use crate::domain::client::{Client, ClientDraft};
    use chrono::NaiveDate;

    async fn seeded_client(clients: &InMemoryClientStore) -> ClientId {
        let client = Client::create(
            ClientId::new(),
            ClientDraft {
                first_name: "Sofía".into(),
                last_name: "Roldán".into(),
                national_id: "33444555".into(),
                email: "sofia@example.com".into(),
                phone: String::new(),
                emergency_contact: String::new(),
                birth_date: NaiveDate::from_ymd_opt(1993, 11, 2).unwrap(),
                address: String::new(),
                notes: String::new(),
            },
            Utc::now(),
        )
        .unwrap();
        clients.create(&client).await.unwrap();
        client.id
    }

    #[tokio::test]
    async fn second_enrollment_for_same_client_is_rejected() {
        let clients = Arc::new(InMemoryClientStore::new());
        let fingerprints = Arc::new(InMemoryFingerprintStore::new());
        let client_id = seeded_client(&clients).await;
        let handler = EnrollFingerprintHandler::new(fingerprints, clients);

        handler
            .handle(EnrollFingerprintCommand {
                client_id,
                template: vec![1, 2, 3],
                enrolled_at: Utc::now(),
            })
            .await
            .unwrap();
        let err = handler
            .handle(EnrollFingerprintCommand {
                client_id,
                template: vec![4, 5, 6],
                enrolled_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateKey);
    }

    #[tokio::test]
    async fn enrollment_requires_existing_client() {
        let handler = EnrollFingerprintHandler::new(
            Arc::new(InMemoryFingerprintStore::new()),
            Arc::new(InMemoryClientStore::new()),
        );
        let err = handler
            .handle(EnrollFingerprintCommand {
                client_id: ClientId::new(),
                template: vec![1],
                enrolled_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ClientNotFound);
    }

    #[tokio::test]
    async fn deactivate_then_list_active_only() {
        let clients = Arc::new(InMemoryClientStore::new());
        let fingerprints = Arc::new(InMemoryFingerprintStore::new());
        let client_id = seeded_client(&clients).await;

        let enrolled = EnrollFingerprintHandler::new(fingerprints.clone(), clients)
            .handle(EnrollFingerprintCommand {
                client_id,
                template: vec![9, 9],
                enrolled_at: Utc::now(),
            })
            .await
            .unwrap();

        DeactivateFingerprintHandler::new(fingerprints.clone())
            .handle(enrolled.id)
            .await
            .unwrap();

        let active = ListFingerprintsHandler::new(fingerprints)
            .handle(FingerprintFilter {
                active: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(active.is_empty());
    }
}

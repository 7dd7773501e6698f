//! Payment repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::finance::{Payment, PaymentConcept, PaymentMethod};
use crate::domain::foundation::{ClientId, DomainError, MembershipId, PaymentId};

/// Query filter for payment listings; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub client_id: Option<ClientId>,
    pub membership_id: Option<MembershipId>,
    pub method: Option<PaymentMethod>,
    pub concept: Option<PaymentConcept>,
    /// Inclusive lower bound on the payment date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the payment date.
    pub to: Option<NaiveDate>,
}

/// Repository port for payment persistence.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Persists a new payment.
    async fn create(&self, payment: &Payment) -> Result<(), DomainError>;

    /// Finds a payment by ID.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError>;

    /// Lists payments matching the filter, newest first.
    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DomainError>;
}

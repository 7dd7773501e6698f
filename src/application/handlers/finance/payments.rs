//! Payment use cases: recording and reading income.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::application::views::{month_total_view, payment_list_view, PaymentListView, PeriodTotalView};
use crate::domain::finance::{Payment, PaymentConcept, PaymentMethod};
use crate::domain::foundation::{Amount, ClientId, DomainError, ErrorCode, MembershipId, PaymentId};
use crate::ports::{ClientRepository, MembershipRepository, PaymentFilter, PaymentRepository};

use super::super::shared::require_client;

/// Command to record a client payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub client_id: ClientId,
    pub membership_id: Option<MembershipId>,
    pub paid_on: NaiveDate,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub concept: PaymentConcept,
    pub notes: String,
}

/// Handler for recording payments. Payments are immutable once written;
/// there is no update or delete path.
pub struct RecordPaymentHandler {
    payments: Arc<dyn PaymentRepository>,
    clients: Arc<dyn ClientRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl RecordPaymentHandler {
    pub fn new(
        payments: Arc<dyn PaymentRepository>,
        clients: Arc<dyn ClientRepository>,
        memberships: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            payments,
            clients,
            memberships,
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(client_id = %cmd.client_id))]
    pub async fn handle(&self, cmd: RecordPaymentCommand) -> Result<Payment, DomainError> {
        let client = require_client(self.clients.as_ref(), &cmd.client_id).await?;
        if let Some(membership_id) = &cmd.membership_id {
            self.memberships
                .find_by_id(membership_id)
                .await?
                .ok_or_else(|| {
                    DomainError::new(ErrorCode::MembershipNotFound, "Membership not found")
                })?;
        }

        let payment = Payment::record(
            PaymentId::new(),
            client.id,
            cmd.membership_id,
            cmd.paid_on,
            cmd.amount_cents,
            cmd.method,
            cmd.concept,
            cmd.notes,
        )?;
        self.payments.create(&payment).await?;
        tracing::info!(payment_id = %payment.id, amount = payment.amount.as_cents(), "payment recorded");
        Ok(payment)
    }
}

/// Handler for payment listings with client names joined in.
pub struct ListPaymentsHandler {
    payments: Arc<dyn PaymentRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl ListPaymentsHandler {
    pub fn new(payments: Arc<dyn PaymentRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { payments, clients }
    }

    pub async fn handle(&self, filter: PaymentFilter) -> Result<Vec<PaymentListView>, DomainError> {
        let payments = self.payments.list(&filter).await?;
        let mut views = Vec::with_capacity(payments.len());
        for payment in &payments {
            let client_name = self
                .clients
                .find_by_id(&payment.client_id)
                .await?
                .map(|c| c.full_name());
            views.push(payment_list_view(payment, client_name));
        }
        Ok(views)
    }
}

/// Returns the first and last day of the month `today` falls in.
pub(crate) fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let next_month = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last = next_month
        .map(|d| d.pred_opt().unwrap_or(today))
        .unwrap_or(today);
    (first, last)
}

/// Handler for the income total of the current calendar month. An empty
/// month totals to zero, never an error.
pub struct MonthIncomeHandler {
    payments: Arc<dyn PaymentRepository>,
}

impl MonthIncomeHandler {
    pub fn new(payments: Arc<dyn PaymentRepository>) -> Self {
        Self { payments }
    }

    pub async fn handle(&self, today: NaiveDate) -> Result<PeriodTotalView, DomainError> {
        let (from, to) = month_bounds(today);
        let payments = self
            .payments
            .list(&PaymentFilter {
                from: Some(from),
                to: Some(to),
                ..Default::default()
            })
            .await?;
        let total: Amount = payments.iter().map(|p| p.amount).sum();
        Ok(month_total_view(today, total))
    }
}

//! Client payment record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, ClientId, MembershipId, PaymentId, ValidationError};

/// How a payment was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
    DebitCard,
    CreditCard,
    MercadoPago,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::DebitCard => "Debit card",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::MercadoPago => "Mercado Pago",
        }
    }
}

/// What the payment was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentConcept {
    Membership,
    Enrollment,
    PersonalTraining,
    Product,
    Other,
}

impl PaymentConcept {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentConcept::Membership => "Membership",
            PaymentConcept::Enrollment => "Enrollment",
            PaymentConcept::PersonalTraining => "Personal training",
            PaymentConcept::Product => "Product sale",
            PaymentConcept::Other => "Other",
        }
    }
}

/// A payment made by a client, optionally tied to a membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub client_id: ClientId,
    pub membership_id: Option<MembershipId>,
    pub paid_on: NaiveDate,
    /// Amount in integer cents; strictly positive.
    pub amount: Amount,
    pub method: PaymentMethod,
    pub concept: PaymentConcept,
    pub notes: String,
}

impl Payment {
    /// Records a payment.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `amount_cents <= 0`.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        id: PaymentId,
        client_id: ClientId,
        membership_id: Option<MembershipId>,
        paid_on: NaiveDate,
        amount_cents: i64,
        method: PaymentMethod,
        concept: PaymentConcept,
        notes: String,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            client_id,
            membership_id,
            paid_on,
            amount: Amount::positive("amount", amount_cents)?,
            method,
            concept,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_amount_rejected() {
        let result = Payment::record(
            PaymentId::new(),
            ClientId::new(),
            None,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            0,
            PaymentMethod::Cash,
            PaymentConcept::Membership,
            String::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn method_tokens_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::MercadoPago).unwrap(),
            "\"mercado_pago\""
        );
    }
}

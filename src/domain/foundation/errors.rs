//! Error types shared across the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    ClientNotFound,
    FingerprintNotFound,
    ReminderNotFound,
    PlanNotFound,
    MembershipNotFound,
    RoutineNotFound,
    WeekNotFound,
    TrainingDayNotFound,
    AssignmentNotFound,
    CatalogEntryNotFound,
    PaymentNotFound,
    ExpenseNotFound,
    AccountStatusNotFound,

    // Conflict errors
    DuplicateKey,
    ReferencedInUse,

    // State errors
    InvalidStateTransition,
    PlanInactive,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ClientNotFound => "CLIENT_NOT_FOUND",
            ErrorCode::FingerprintNotFound => "FINGERPRINT_NOT_FOUND",
            ErrorCode::ReminderNotFound => "REMINDER_NOT_FOUND",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::MembershipNotFound => "MEMBERSHIP_NOT_FOUND",
            ErrorCode::RoutineNotFound => "ROUTINE_NOT_FOUND",
            ErrorCode::WeekNotFound => "WEEK_NOT_FOUND",
            ErrorCode::TrainingDayNotFound => "TRAINING_DAY_NOT_FOUND",
            ErrorCode::AssignmentNotFound => "ASSIGNMENT_NOT_FOUND",
            ErrorCode::CatalogEntryNotFound => "CATALOG_ENTRY_NOT_FOUND",
            ErrorCode::PaymentNotFound => "PAYMENT_NOT_FOUND",
            ErrorCode::ExpenseNotFound => "EXPENSE_NOT_FOUND",
            ErrorCode::AccountStatusNotFound => "ACCOUNT_STATUS_NOT_FOUND",
            ErrorCode::DuplicateKey => "DUPLICATE_KEY",
            ErrorCode::ReferencedInUse => "REFERENCED_IN_USE",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::PlanInactive => "PLAN_INACTIVE",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

impl ErrorCode {
    /// Whether this code denotes a missing record (distinct from validation).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::ClientNotFound
                | ErrorCode::FingerprintNotFound
                | ErrorCode::ReminderNotFound
                | ErrorCode::PlanNotFound
                | ErrorCode::MembershipNotFound
                | ErrorCode::RoutineNotFound
                | ErrorCode::WeekNotFound
                | ErrorCode::TrainingDayNotFound
                | ErrorCode::AssignmentNotFound
                | ErrorCode::CatalogEntryNotFound
                | ErrorCode::PaymentNotFound
                | ErrorCode::ExpenseNotFound
                | ErrorCode::AccountStatusNotFound
        )
    }

    /// Whether this code denotes a conflict with existing records.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ErrorCode::DuplicateKey | ErrorCode::ReferencedInUse)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a duplicate unique key conflict for a specific field.
    pub fn duplicate(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::DuplicateKey,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a storage failure error. Fatal for the request; no retry.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("number", 1, 4, 5);
        assert_eq!(
            format!("{}", err),
            "Field 'number' must be between 1 and 4, got 5"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ClientNotFound, "Client not found");
        assert_eq!(format!("{}", err), "[CLIENT_NOT_FOUND] Client not found");
    }

    #[test]
    fn validation_error_converts_with_field_detail() {
        let err: DomainError = ValidationError::empty_field("objective").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"objective".to_string()));
    }

    #[test]
    fn not_found_and_conflict_categories_are_disjoint() {
        assert!(ErrorCode::RoutineNotFound.is_not_found());
        assert!(!ErrorCode::RoutineNotFound.is_conflict());
        assert!(ErrorCode::ReferencedInUse.is_conflict());
        assert!(!ErrorCode::DuplicateKey.is_not_found());
    }
}

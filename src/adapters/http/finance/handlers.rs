//! HTTP handlers for payment, expense, and account status endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::finance::{
    CreateFixedExpenseCommand, CreateFixedExpenseHandler, ListAccountStatusesHandler,
    ListFixedExpensesHandler, ListPaymentsHandler, ListVariableExpensesHandler,
    MonthIncomeHandler, MonthlyObligationsHandler, OpenAccountStatusCommand,
    OpenAccountStatusHandler, RecordPaymentCommand, RecordPaymentHandler,
    RecordVariableExpenseCommand, RecordVariableExpenseHandler, SetFixedExpenseActiveHandler,
    UpdateAccountStatusCommand, UpdateAccountStatusHandler,
};
use crate::domain::foundation::{AccountStatusId, FixedExpenseId};

use super::dto::{
    AccountStatusQuery, AccountStatusSnapshotRequest, FixedExpenseQuery, FixedExpenseRequest,
    OpenAccountStatusRequest, PaymentQuery, PaymentRequest, VariableExpenseQuery,
    VariableExpenseRequest,
};

/// Router state for the finance endpoints.
#[derive(Clone)]
pub struct FinanceHandlers {
    pub record_payment: Arc<RecordPaymentHandler>,
    pub list_payments: Arc<ListPaymentsHandler>,
    pub month_income: Arc<MonthIncomeHandler>,
    pub create_fixed: Arc<CreateFixedExpenseHandler>,
    pub set_fixed_active: Arc<SetFixedExpenseActiveHandler>,
    pub list_fixed: Arc<ListFixedExpensesHandler>,
    pub monthly_obligations: Arc<MonthlyObligationsHandler>,
    pub record_variable: Arc<RecordVariableExpenseHandler>,
    pub list_variable: Arc<ListVariableExpensesHandler>,
    pub open_status: Arc<OpenAccountStatusHandler>,
    pub update_status: Arc<UpdateAccountStatusHandler>,
    pub list_statuses: Arc<ListAccountStatusesHandler>,
}

/// POST /api/payments
pub async fn record_payment(
    State(handlers): State<FinanceHandlers>,
    Json(req): Json<PaymentRequest>,
) -> Response {
    let cmd = RecordPaymentCommand {
        client_id: req.client_id,
        membership_id: req.membership_id,
        paid_on: req.paid_on,
        amount_cents: req.amount_cents,
        method: req.method,
        concept: req.concept,
        notes: req.notes,
    };
    match handlers.record_payment.handle(cmd).await {
        Ok(payment) => (StatusCode::CREATED, Json(payment)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/payments
pub async fn list_payments(
    State(handlers): State<FinanceHandlers>,
    Query(query): Query<PaymentQuery>,
) -> Response {
    match handlers.list_payments.handle(query.into_filter()).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/payments/month-total
pub async fn month_income(State(handlers): State<FinanceHandlers>) -> Response {
    match handlers.month_income.handle(Utc::now().date_naive()).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/fixed-expenses
pub async fn create_fixed_expense(
    State(handlers): State<FinanceHandlers>,
    Json(req): Json<FixedExpenseRequest>,
) -> Response {
    let cmd = CreateFixedExpenseCommand {
        name: req.name,
        category: req.category,
        monthly_amount_cents: req.monthly_amount_cents,
        due_day: req.due_day,
        notes: req.notes,
    };
    match handlers.create_fixed.handle(cmd).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/fixed-expenses
pub async fn list_fixed_expenses(
    State(handlers): State<FinanceHandlers>,
    Query(query): Query<FixedExpenseQuery>,
) -> Response {
    match handlers.list_fixed.handle(query.into_filter()).await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/fixed-expenses/due-soon
pub async fn fixed_expenses_due_soon(State(handlers): State<FinanceHandlers>) -> Response {
    match handlers.list_fixed.due_soon(Utc::now().date_naive()).await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/fixed-expenses/monthly-total
pub async fn monthly_obligations(State(handlers): State<FinanceHandlers>) -> Response {
    match handlers.monthly_obligations.handle().await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/fixed-expenses/:id/activate
pub async fn activate_fixed_expense(
    State(handlers): State<FinanceHandlers>,
    Path(id): Path<FixedExpenseId>,
) -> Response {
    match handlers.set_fixed_active.handle(id, true).await {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/fixed-expenses/:id/deactivate
pub async fn deactivate_fixed_expense(
    State(handlers): State<FinanceHandlers>,
    Path(id): Path<FixedExpenseId>,
) -> Response {
    match handlers.set_fixed_active.handle(id, false).await {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/expenses
pub async fn record_variable_expense(
    State(handlers): State<FinanceHandlers>,
    Json(req): Json<VariableExpenseRequest>,
) -> Response {
    let cmd = RecordVariableExpenseCommand {
        spent_on: req.spent_on,
        category: req.category,
        description: req.description,
        amount_cents: req.amount_cents,
        method: req.method,
        supplier: req.supplier,
        receipt: req.receipt,
        notes: req.notes,
    };
    match handlers.record_variable.handle(cmd).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/expenses
pub async fn list_variable_expenses(
    State(handlers): State<FinanceHandlers>,
    Query(query): Query<VariableExpenseQuery>,
) -> Response {
    match handlers.list_variable.handle(query.into_filter()).await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/expenses/month-total
pub async fn variable_expenses_month_total(State(handlers): State<FinanceHandlers>) -> Response {
    match handlers
        .list_variable
        .month_total(Utc::now().date_naive())
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/account-statuses
pub async fn open_account_status(
    State(handlers): State<FinanceHandlers>,
    Json(req): Json<OpenAccountStatusRequest>,
) -> Response {
    let cmd = OpenAccountStatusCommand {
        client_id: req.client_id,
        pending_balance_cents: req.pending_balance_cents,
    };
    match handlers.open_status.handle(cmd).await {
        Ok(status) => (StatusCode::CREATED, Json(status)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/account-statuses/:id
pub async fn update_account_status(
    State(handlers): State<FinanceHandlers>,
    Path(id): Path<AccountStatusId>,
    Json(req): Json<AccountStatusSnapshotRequest>,
) -> Response {
    let cmd = UpdateAccountStatusCommand {
        id,
        current_membership_id: req.current_membership_id,
        pending_balance_cents: req.pending_balance_cents,
        last_payment_on: req.last_payment_on,
        next_due_on: req.next_due_on,
        state: req.state,
        notes: req.notes,
    };
    match handlers.update_status.handle(cmd).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/account-statuses
pub async fn list_account_statuses(
    State(handlers): State<FinanceHandlers>,
    Query(query): Query<AccountStatusQuery>,
) -> Response {
    match handlers.list_statuses.handle(query.into_filter()).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/account-statuses/upcoming-dues
pub async fn account_statuses_upcoming_dues(State(handlers): State<FinanceHandlers>) -> Response {
    match handlers
        .list_statuses
        .upcoming_dues(Utc::now().date_naive())
        .await
    {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

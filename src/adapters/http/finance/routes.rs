//! Routes for payment, expense, and account status endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    account_statuses_upcoming_dues, activate_fixed_expense, create_fixed_expense,
    deactivate_fixed_expense, fixed_expenses_due_soon, list_account_statuses,
    list_fixed_expenses, list_payments, list_variable_expenses, month_income,
    monthly_obligations, open_account_status, record_payment, record_variable_expense,
    update_account_status, variable_expenses_month_total, FinanceHandlers,
};

/// Builds the finance router, mounted under `/api`.
pub fn finance_routes(handlers: FinanceHandlers) -> Router {
    Router::new()
        .route("/payments", post(record_payment).get(list_payments))
        .route("/payments/month-total", get(month_income))
        .route(
            "/fixed-expenses",
            post(create_fixed_expense).get(list_fixed_expenses),
        )
        .route("/fixed-expenses/due-soon", get(fixed_expenses_due_soon))
        .route("/fixed-expenses/monthly-total", get(monthly_obligations))
        .route(
            "/fixed-expenses/:id/activate",
            post(activate_fixed_expense),
        )
        .route(
            "/fixed-expenses/:id/deactivate",
            post(deactivate_fixed_expense),
        )
        .route(
            "/expenses",
            post(record_variable_expense).get(list_variable_expenses),
        )
        .route("/expenses/month-total", get(variable_expenses_month_total))
        .route(
            "/account-statuses",
            post(open_account_status).get(list_account_statuses),
        )
        .route(
            "/account-statuses/upcoming-dues",
            get(account_statuses_upcoming_dues),
        )
        .route("/account-statuses/:id", put(update_account_status))
        .with_state(handlers)
}

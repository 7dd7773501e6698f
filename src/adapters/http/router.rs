//! Top-level router assembly: wires repositories into use-case handlers
//! and mounts every resource router under `/api`.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::client::{
    CancelReminderHandler, DeactivateFingerprintHandler, EnrollFingerprintHandler,
    GetClientHandler, ListClientsHandler, ListFingerprintsHandler, ListRemindersHandler,
    MarkReminderSentHandler, RegisterClientHandler, ScheduleReminderHandler,
    SetClientActiveHandler, UpdateClientHandler,
};
use crate::application::handlers::finance::{
    CreateFixedExpenseHandler, ListAccountStatusesHandler, ListFixedExpensesHandler,
    ListPaymentsHandler, ListVariableExpensesHandler, MonthIncomeHandler,
    MonthlyObligationsHandler, OpenAccountStatusHandler, RecordPaymentHandler,
    RecordVariableExpenseHandler, SetFixedExpenseActiveHandler, UpdateAccountStatusHandler,
};
use crate::application::handlers::membership::{
    CreateMembershipHandler, CreatePlanHandler, GetPlanHandler, ListMembershipsHandler,
    ListPlansHandler, SetMembershipActiveHandler, SetPlanActiveHandler, UpcomingDuesHandler,
    UpdatePlanHandler,
};
use crate::application::handlers::routine::{
    AddExerciseHandler, AddTrainingDayHandler, AddWeekHandler, CreateCatalogEntryHandler,
    CreateRoutineHandler, DeleteCatalogEntryHandler, GetRoutineHandler, GetRoutineSummaryHandler,
    ListCatalogHandler,
    ListRoutinesHandler, RemoveExerciseHandler, SetRoutineActiveHandler,
    UpdateCatalogEntryHandler, UpdateExerciseHandler, UpdateTrainingDayHandler, UpdateWeekHandler,
};
use crate::ports::{
    AccountStatusRepository, ClientRepository, ExerciseCatalogRepository, FingerprintRepository,
    FixedExpenseRepository, MembershipRepository, PaymentRepository, PlanRepository,
    ReminderRepository, RoutineRepository, VariableExpenseRepository,
};

use super::clients::{client_routes, ClientHandlers};
use super::finance::{finance_routes, FinanceHandlers};
use super::memberships::{membership_routes, MembershipHandlers};
use super::routines::{routine_routes, RoutineHandlers};

/// The full set of repositories the API needs.
#[derive(Clone)]
pub struct AppRepositories {
    pub clients: Arc<dyn ClientRepository>,
    pub fingerprints: Arc<dyn FingerprintRepository>,
    pub reminders: Arc<dyn ReminderRepository>,
    pub plans: Arc<dyn PlanRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub catalog: Arc<dyn ExerciseCatalogRepository>,
    pub routines: Arc<dyn RoutineRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub fixed_expenses: Arc<dyn FixedExpenseRepository>,
    pub variable_expenses: Arc<dyn VariableExpenseRepository>,
    pub account_statuses: Arc<dyn AccountStatusRepository>,
}

/// Builds the application router with every endpoint mounted under
/// `/api`, plus a liveness probe at `/health`.
pub fn api_router(repos: AppRepositories, request_timeout: Duration) -> Router {
    let client_handlers = ClientHandlers {
        register: Arc::new(RegisterClientHandler::new(repos.clients.clone())),
        update: Arc::new(UpdateClientHandler::new(repos.clients.clone())),
        set_active: Arc::new(SetClientActiveHandler::new(repos.clients.clone())),
        list: Arc::new(ListClientsHandler::new(repos.clients.clone())),
        get: Arc::new(GetClientHandler::new(
            repos.clients.clone(),
            repos.reminders.clone(),
        )),
        enroll_fingerprint: Arc::new(EnrollFingerprintHandler::new(
            repos.fingerprints.clone(),
            repos.clients.clone(),
        )),
        deactivate_fingerprint: Arc::new(DeactivateFingerprintHandler::new(
            repos.fingerprints.clone(),
        )),
        list_fingerprints: Arc::new(ListFingerprintsHandler::new(repos.fingerprints.clone())),
        schedule_reminder: Arc::new(ScheduleReminderHandler::new(
            repos.reminders.clone(),
            repos.clients.clone(),
        )),
        send_reminder: Arc::new(MarkReminderSentHandler::new(repos.reminders.clone())),
        cancel_reminder: Arc::new(CancelReminderHandler::new(repos.reminders.clone())),
        list_reminders: Arc::new(ListRemindersHandler::new(
            repos.reminders.clone(),
            repos.clients.clone(),
        )),
    };

    let membership_handlers = MembershipHandlers {
        create_plan: Arc::new(CreatePlanHandler::new(repos.plans.clone())),
        update_plan: Arc::new(UpdatePlanHandler::new(repos.plans.clone())),
        set_plan_active: Arc::new(SetPlanActiveHandler::new(repos.plans.clone())),
        list_plans: Arc::new(ListPlansHandler::new(repos.plans.clone())),
        get_plan: Arc::new(GetPlanHandler::new(
            repos.plans.clone(),
            repos.memberships.clone(),
        )),
        create_membership: Arc::new(CreateMembershipHandler::new(
            repos.memberships.clone(),
            repos.clients.clone(),
            repos.plans.clone(),
        )),
        set_membership_active: Arc::new(SetMembershipActiveHandler::new(
            repos.memberships.clone(),
        )),
        list_memberships: Arc::new(ListMembershipsHandler::new(
            repos.memberships.clone(),
            repos.clients.clone(),
            repos.plans.clone(),
        )),
        upcoming_dues: Arc::new(UpcomingDuesHandler::new(
            repos.memberships.clone(),
            repos.clients.clone(),
            repos.plans.clone(),
        )),
    };

    let routine_handlers = RoutineHandlers {
        create_entry: Arc::new(CreateCatalogEntryHandler::new(repos.catalog.clone())),
        update_entry: Arc::new(UpdateCatalogEntryHandler::new(repos.catalog.clone())),
        list_catalog: Arc::new(ListCatalogHandler::new(repos.catalog.clone())),
        delete_entry: Arc::new(DeleteCatalogEntryHandler::new(
            repos.catalog.clone(),
            repos.routines.clone(),
        )),
        create_routine: Arc::new(CreateRoutineHandler::new(
            repos.routines.clone(),
            repos.clients.clone(),
        )),
        set_routine_active: Arc::new(SetRoutineActiveHandler::new(repos.routines.clone())),
        list_routines: Arc::new(ListRoutinesHandler::new(
            repos.routines.clone(),
            repos.clients.clone(),
        )),
        get_routine: Arc::new(GetRoutineHandler::new(
            repos.routines.clone(),
            repos.clients.clone(),
            repos.catalog.clone(),
        )),
        get_summary: Arc::new(GetRoutineSummaryHandler::new(
            repos.routines.clone(),
            repos.clients.clone(),
        )),
        add_week: Arc::new(AddWeekHandler::new(repos.routines.clone())),
        update_week: Arc::new(UpdateWeekHandler::new(repos.routines.clone())),
        add_day: Arc::new(AddTrainingDayHandler::new(repos.routines.clone())),
        update_day: Arc::new(UpdateTrainingDayHandler::new(repos.routines.clone())),
        add_exercise: Arc::new(AddExerciseHandler::new(
            repos.routines.clone(),
            repos.catalog.clone(),
        )),
        update_exercise: Arc::new(UpdateExerciseHandler::new(repos.routines.clone())),
        remove_exercise: Arc::new(RemoveExerciseHandler::new(repos.routines.clone())),
    };

    let finance_handlers = FinanceHandlers {
        record_payment: Arc::new(RecordPaymentHandler::new(
            repos.payments.clone(),
            repos.clients.clone(),
            repos.memberships.clone(),
        )),
        list_payments: Arc::new(ListPaymentsHandler::new(
            repos.payments.clone(),
            repos.clients.clone(),
        )),
        month_income: Arc::new(MonthIncomeHandler::new(repos.payments.clone())),
        create_fixed: Arc::new(CreateFixedExpenseHandler::new(repos.fixed_expenses.clone())),
        set_fixed_active: Arc::new(SetFixedExpenseActiveHandler::new(
            repos.fixed_expenses.clone(),
        )),
        list_fixed: Arc::new(ListFixedExpensesHandler::new(repos.fixed_expenses.clone())),
        monthly_obligations: Arc::new(MonthlyObligationsHandler::new(
            repos.fixed_expenses.clone(),
        )),
        record_variable: Arc::new(RecordVariableExpenseHandler::new(
            repos.variable_expenses.clone(),
        )),
        list_variable: Arc::new(ListVariableExpensesHandler::new(
            repos.variable_expenses.clone(),
        )),
        open_status: Arc::new(OpenAccountStatusHandler::new(
            repos.account_statuses.clone(),
            repos.clients.clone(),
        )),
        update_status: Arc::new(UpdateAccountStatusHandler::new(
            repos.account_statuses.clone(),
        )),
        list_statuses: Arc::new(ListAccountStatusesHandler::new(
            repos.account_statuses.clone(),
            repos.clients.clone(),
        )),
    };

    let api = Router::new()
        .merge(client_routes(client_handlers))
        .merge(membership_routes(membership_handlers))
        .merge(routine_routes(routine_handlers))
        .merge(finance_routes(finance_handlers));

    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
}

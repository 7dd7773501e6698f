//! Derived-view layer: read-only view models and the explicit functions
//! that build them, one per use case. The request layer picks the
//! function; nothing here is persisted.

mod client_views;
mod finance_views;
mod membership_views;
mod routine_views;

pub use client_views::{
    client_detail_view, client_list_view, reminder_list_view, ClientDetailView, ClientListView,
    ReminderListView,
};
pub use finance_views::{
    account_status_list_view, month_total_view, monthly_obligations_view, payment_list_view,
    AccountStatusListView, MonthlyObligationsView, PaymentListView, PeriodTotalView,
};
pub use membership_views::{
    membership_list_view, plan_detail_view, MembershipListView, PlanDetailView,
};
pub use routine_views::{
    assignment_view, day_detail_view, routine_detail_view, routine_list_view,
    routine_summary_view, week_detail_view, AssignmentView, DayDetailView, RoutineDetailView,
    RoutineListView, RoutineSummaryView, WeekDetailView,
};

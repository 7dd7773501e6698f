//! Finance use cases: income, expenses, and the per-client account
//! status snapshots.

mod account_status;
mod expenses;
mod payments;

pub use account_status::{
    ListAccountStatusesHandler, OpenAccountStatusCommand, OpenAccountStatusHandler,
    UpdateAccountStatusCommand, UpdateAccountStatusHandler,
};
pub use expenses::{
    CreateFixedExpenseCommand, CreateFixedExpenseHandler, ListFixedExpensesHandler,
    ListVariableExpensesHandler, MonthlyObligationsHandler, RecordVariableExpenseCommand,
    RecordVariableExpenseHandler, SetFixedExpenseActiveHandler,
};
pub use payments::{
    ListPaymentsHandler, MonthIncomeHandler, RecordPaymentCommand, RecordPaymentHandler,
};

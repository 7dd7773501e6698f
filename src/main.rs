//! Gym Admin server binary.

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use gym_admin::adapters::http::{api_router, AppRepositories};
use gym_admin::adapters::memory::{
    InMemoryAccountStatusStore, InMemoryCatalogStore, InMemoryClientStore,
    InMemoryFingerprintStore, InMemoryFixedExpenseStore, InMemoryMembershipStore,
    InMemoryPaymentStore, InMemoryPlanStore, InMemoryReminderStore, InMemoryRoutineStore,
    InMemoryVariableExpenseStore,
};
use gym_admin::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let repos = AppRepositories {
        clients: Arc::new(InMemoryClientStore::new()),
        fingerprints: Arc::new(InMemoryFingerprintStore::new()),
        reminders: Arc::new(InMemoryReminderStore::new()),
        plans: Arc::new(InMemoryPlanStore::new()),
        memberships: Arc::new(InMemoryMembershipStore::new()),
        catalog: Arc::new(InMemoryCatalogStore::new()),
        routines: Arc::new(InMemoryRoutineStore::new()),
        payments: Arc::new(InMemoryPaymentStore::new()),
        fixed_expenses: Arc::new(InMemoryFixedExpenseStore::new()),
        variable_expenses: Arc::new(InMemoryVariableExpenseStore::new()),
        account_statuses: Arc::new(InMemoryAccountStatusStore::new()),
    };

    let app = api_router(repos, config.server.request_timeout());

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

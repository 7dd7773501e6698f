//! Routes for client, fingerprint, and reminder endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    activate_client, cancel_reminder, create_client, deactivate_client, deactivate_fingerprint,
    enroll_fingerprint, get_client, list_clients, list_fingerprints, list_reminders,
    schedule_reminder, send_reminder, update_client, ClientHandlers,
};

/// Builds the client-facing router, mounted under `/api`.
pub fn client_routes(handlers: ClientHandlers) -> Router {
    Router::new()
        .route("/clients", post(create_client).get(list_clients))
        .route("/clients/:id", get(get_client))
        .route("/clients/:id", put(update_client))
        .route("/clients/:id/activate", post(activate_client))
        .route("/clients/:id/deactivate", post(deactivate_client))
        .route(
            "/fingerprints",
            post(enroll_fingerprint).get(list_fingerprints),
        )
        .route(
            "/fingerprints/:id/deactivate",
            post(deactivate_fingerprint),
        )
        .route("/reminders", post(schedule_reminder).get(list_reminders))
        .route("/reminders/:id/send", post(send_reminder))
        .route("/reminders/:id/cancel", post(cancel_reminder))
        .with_state(handlers)
}

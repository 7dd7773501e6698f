//! HTTP handlers for client, fingerprint, and reminder endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::client::{
    CancelReminderHandler, DeactivateFingerprintHandler, EnrollFingerprintCommand,
    EnrollFingerprintHandler, GetClientHandler, GetClientQuery, ListClientsHandler,
    ListClientsQuery, ListFingerprintsHandler, ListRemindersHandler, ListRemindersQuery,
    MarkReminderSentHandler, RegisterClientCommand, RegisterClientHandler,
    ScheduleReminderCommand, ScheduleReminderHandler, SetClientActiveHandler,
    UpdateClientCommand, UpdateClientHandler,
};
use crate::domain::foundation::{ClientId, FingerprintId, ReminderId};

use super::dto::{
    ClientQuery, ClientRequest, EnrollFingerprintRequest, FingerprintQuery, ReminderQuery,
    ScheduleReminderRequest,
};

/// Router state for the client endpoints.
#[derive(Clone)]
pub struct ClientHandlers {
    pub register: Arc<RegisterClientHandler>,
    pub update: Arc<UpdateClientHandler>,
    pub set_active: Arc<SetClientActiveHandler>,
    pub list: Arc<ListClientsHandler>,
    pub get: Arc<GetClientHandler>,
    pub enroll_fingerprint: Arc<EnrollFingerprintHandler>,
    pub deactivate_fingerprint: Arc<DeactivateFingerprintHandler>,
    pub list_fingerprints: Arc<ListFingerprintsHandler>,
    pub schedule_reminder: Arc<ScheduleReminderHandler>,
    pub send_reminder: Arc<MarkReminderSentHandler>,
    pub cancel_reminder: Arc<CancelReminderHandler>,
    pub list_reminders: Arc<ListRemindersHandler>,
}

/// POST /api/clients
pub async fn create_client(
    State(handlers): State<ClientHandlers>,
    Json(req): Json<ClientRequest>,
) -> Response {
    let cmd = RegisterClientCommand {
        draft: req.into_draft(),
        registered_at: Utc::now(),
    };
    match handlers.register.handle(cmd).await {
        Ok(client) => (StatusCode::CREATED, Json(client)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/clients
pub async fn list_clients(
    State(handlers): State<ClientHandlers>,
    Query(query): Query<ClientQuery>,
) -> Response {
    let query = ListClientsQuery {
        filter: query.into_filter(),
        today: Utc::now().date_naive(),
    };
    match handlers.list.handle(query).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/clients/:id
pub async fn get_client(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ClientId>,
) -> Response {
    let query = GetClientQuery {
        id,
        today: Utc::now().date_naive(),
    };
    match handlers.get.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/clients/:id
pub async fn update_client(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ClientId>,
    Json(req): Json<ClientRequest>,
) -> Response {
    let cmd = UpdateClientCommand {
        id,
        draft: req.into_draft(),
    };
    match handlers.update.handle(cmd).await {
        Ok(client) => (StatusCode::OK, Json(client)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/clients/:id/activate
pub async fn activate_client(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ClientId>,
) -> Response {
    match handlers.set_active.handle(id, true).await {
        Ok(client) => (StatusCode::OK, Json(client)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/clients/:id/deactivate
pub async fn deactivate_client(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ClientId>,
) -> Response {
    match handlers.set_active.handle(id, false).await {
        Ok(client) => (StatusCode::OK, Json(client)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/fingerprints
pub async fn enroll_fingerprint(
    State(handlers): State<ClientHandlers>,
    Json(req): Json<EnrollFingerprintRequest>,
) -> Response {
    let cmd = EnrollFingerprintCommand {
        client_id: req.client_id,
        template: req.template,
        enrolled_at: Utc::now(),
    };
    match handlers.enroll_fingerprint.handle(cmd).await {
        Ok(fingerprint) => (StatusCode::CREATED, Json(fingerprint)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/fingerprints
pub async fn list_fingerprints(
    State(handlers): State<ClientHandlers>,
    Query(query): Query<FingerprintQuery>,
) -> Response {
    match handlers.list_fingerprints.handle(query.into_filter()).await {
        Ok(fingerprints) => (StatusCode::OK, Json(fingerprints)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/fingerprints/:id/deactivate
pub async fn deactivate_fingerprint(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<FingerprintId>,
) -> Response {
    match handlers.deactivate_fingerprint.handle(id).await {
        Ok(fingerprint) => (StatusCode::OK, Json(fingerprint)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/reminders
pub async fn schedule_reminder(
    State(handlers): State<ClientHandlers>,
    Json(req): Json<ScheduleReminderRequest>,
) -> Response {
    let cmd = ScheduleReminderCommand {
        client_id: req.client_id,
        kind: req.kind,
        channel: req.channel,
        message: req.message,
        scheduled_for: req.scheduled_for,
        now: Utc::now(),
    };
    match handlers.schedule_reminder.handle(cmd).await {
        Ok(reminder) => (StatusCode::CREATED, Json(reminder)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/reminders
pub async fn list_reminders(
    State(handlers): State<ClientHandlers>,
    Query(query): Query<ReminderQuery>,
) -> Response {
    let due_today = query.due_today.then(|| Utc::now().date_naive());
    let query = ListRemindersQuery {
        filter: query.into_filter(),
        due_today,
    };
    match handlers.list_reminders.handle(query).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/reminders/:id/send
pub async fn send_reminder(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ReminderId>,
) -> Response {
    match handlers.send_reminder.handle(id, Utc::now()).await {
        Ok(reminder) => (StatusCode::OK, Json(reminder)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/reminders/:id/cancel
pub async fn cancel_reminder(
    State(handlers): State<ClientHandlers>,
    Path(id): Path<ReminderId>,
) -> Response {
    match handlers.cancel_reminder.handle(id).await {
        Ok(reminder) => (StatusCode::OK, Json(reminder)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

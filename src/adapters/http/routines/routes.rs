//! Routes for catalog and routine endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    activate_routine, add_day, add_exercise, add_week, create_catalog_entry, create_routine,
    deactivate_routine, delete_catalog_entry, get_routine, get_routine_summary, list_catalog,
    list_routines,
    remove_exercise, update_catalog_entry, update_day, update_exercise, update_week,
    RoutineHandlers,
};

/// Builds the routine router, mounted under `/api`.
pub fn routine_routes(handlers: RoutineHandlers) -> Router {
    Router::new()
        .route("/catalog", post(create_catalog_entry).get(list_catalog))
        .route("/catalog/:id", put(update_catalog_entry))
        .route("/catalog/:id", delete(delete_catalog_entry))
        .route("/routines", post(create_routine).get(list_routines))
        .route("/routines/:id", get(get_routine))
        .route("/routines/:id/summary", get(get_routine_summary))
        .route("/routines/:id/activate", post(activate_routine))
        .route("/routines/:id/deactivate", post(deactivate_routine))
        .route("/routines/:id/weeks", post(add_week))
        .route("/weeks/:id", put(update_week))
        .route("/days", post(add_day))
        .route("/days/:id", put(update_day))
        .route("/exercises", post(add_exercise))
        .route("/exercises/:id", put(update_exercise))
        .route("/exercises/:id", delete(remove_exercise))
        .with_state(handlers)
}

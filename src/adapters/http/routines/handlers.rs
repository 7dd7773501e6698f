//! HTTP handlers for catalog and routine endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::routine::{
    AddExerciseCommand, AddExerciseHandler, AddTrainingDayCommand, AddTrainingDayHandler,
    AddWeekCommand, AddWeekHandler, CreateCatalogEntryCommand, CreateCatalogEntryHandler,
    CreateRoutineCommand, CreateRoutineHandler, DeleteCatalogEntryHandler, GetRoutineHandler,
    GetRoutineQuery, GetRoutineSummaryHandler, ListCatalogHandler, ListRoutinesHandler,
    ListRoutinesQuery,
    RemoveExerciseHandler, SetRoutineActiveHandler, UpdateCatalogEntryCommand,
    UpdateCatalogEntryHandler, UpdateExerciseCommand, UpdateExerciseHandler,
    UpdateTrainingDayCommand, UpdateTrainingDayHandler, UpdateWeekCommand, UpdateWeekHandler,
};
use crate::domain::foundation::{
    AssignmentId, CatalogEntryId, RoutineId, TrainingDayId, WeekId,
};

use super::dto::{
    CatalogEntryRequest, CatalogQuery, ExerciseRequest, RoutineQuery, RoutineRequest,
    TrainingDayRequest, UpdateExerciseRequest, UpdateTrainingDayRequest, WeekRequest,
};

/// Router state for the routine endpoints.
#[derive(Clone)]
pub struct RoutineHandlers {
    pub create_entry: Arc<CreateCatalogEntryHandler>,
    pub update_entry: Arc<UpdateCatalogEntryHandler>,
    pub list_catalog: Arc<ListCatalogHandler>,
    pub delete_entry: Arc<DeleteCatalogEntryHandler>,
    pub create_routine: Arc<CreateRoutineHandler>,
    pub set_routine_active: Arc<SetRoutineActiveHandler>,
    pub list_routines: Arc<ListRoutinesHandler>,
    pub get_routine: Arc<GetRoutineHandler>,
    pub get_summary: Arc<GetRoutineSummaryHandler>,
    pub add_week: Arc<AddWeekHandler>,
    pub update_week: Arc<UpdateWeekHandler>,
    pub add_day: Arc<AddTrainingDayHandler>,
    pub update_day: Arc<UpdateTrainingDayHandler>,
    pub add_exercise: Arc<AddExerciseHandler>,
    pub update_exercise: Arc<UpdateExerciseHandler>,
    pub remove_exercise: Arc<RemoveExerciseHandler>,
}

/// POST /api/catalog
pub async fn create_catalog_entry(
    State(handlers): State<RoutineHandlers>,
    Json(req): Json<CatalogEntryRequest>,
) -> Response {
    let cmd = CreateCatalogEntryCommand {
        name: req.name,
        description: req.description,
        category: req.category,
        muscle_group: req.muscle_group,
    };
    match handlers.create_entry.handle(cmd).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/catalog
pub async fn list_catalog(
    State(handlers): State<RoutineHandlers>,
    Query(query): Query<CatalogQuery>,
) -> Response {
    match handlers.list_catalog.handle(query.into_filter()).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/catalog/:id
pub async fn update_catalog_entry(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<CatalogEntryId>,
    Json(req): Json<CatalogEntryRequest>,
) -> Response {
    let cmd = UpdateCatalogEntryCommand {
        id,
        name: req.name,
        description: req.description,
        category: req.category,
        muscle_group: req.muscle_group,
    };
    match handlers.update_entry.handle(cmd).await {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/catalog/:id
pub async fn delete_catalog_entry(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<CatalogEntryId>,
) -> Response {
    match handlers.delete_entry.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/routines
pub async fn create_routine(
    State(handlers): State<RoutineHandlers>,
    Json(req): Json<RoutineRequest>,
) -> Response {
    let cmd = CreateRoutineCommand {
        client_id: req.client_id,
        name: req.name,
        objective: req.objective,
        start_date: req.start_date,
        end_date: req.end_date,
        notes: req.notes,
        today: Utc::now().date_naive(),
    };
    match handlers.create_routine.handle(cmd).await {
        Ok(routine) => (StatusCode::CREATED, Json(routine)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/routines
pub async fn list_routines(
    State(handlers): State<RoutineHandlers>,
    Query(query): Query<RoutineQuery>,
) -> Response {
    let query = ListRoutinesQuery {
        filter: query.into_filter(),
        today: Utc::now().date_naive(),
    };
    match handlers.list_routines.handle(query).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/routines/:id
pub async fn get_routine(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<RoutineId>,
) -> Response {
    let query = GetRoutineQuery {
        id,
        today: Utc::now().date_naive(),
    };
    match handlers.get_routine.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/routines/:id/summary
pub async fn get_routine_summary(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<RoutineId>,
) -> Response {
    match handlers
        .get_summary
        .handle(id, Utc::now().date_naive())
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/routines/:id/activate
pub async fn activate_routine(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<RoutineId>,
) -> Response {
    match handlers.set_routine_active.handle(id, true).await {
        Ok(routine) => (StatusCode::OK, Json(routine)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/routines/:id/deactivate
pub async fn deactivate_routine(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<RoutineId>,
) -> Response {
    match handlers.set_routine_active.handle(id, false).await {
        Ok(routine) => (StatusCode::OK, Json(routine)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/routines/:id/weeks
pub async fn add_week(
    State(handlers): State<RoutineHandlers>,
    Path(routine_id): Path<RoutineId>,
    Json(req): Json<WeekRequest>,
) -> Response {
    let cmd = AddWeekCommand {
        routine_id,
        number: req.number,
        notes: req.notes,
    };
    match handlers.add_week.handle(cmd).await {
        Ok(week) => (StatusCode::CREATED, Json(week)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/weeks/:id
pub async fn update_week(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<WeekId>,
    Json(req): Json<WeekRequest>,
) -> Response {
    let cmd = UpdateWeekCommand {
        id,
        number: req.number,
        notes: req.notes,
    };
    match handlers.update_week.handle(cmd).await {
        Ok(week) => (StatusCode::OK, Json(week)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/days
pub async fn add_day(
    State(handlers): State<RoutineHandlers>,
    Json(req): Json<TrainingDayRequest>,
) -> Response {
    let cmd = AddTrainingDayCommand {
        week_id: req.week_id,
        weekday: req.weekday,
        name: req.name,
        notes: req.notes,
    };
    match handlers.add_day.handle(cmd).await {
        Ok(day) => (StatusCode::CREATED, Json(day)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/days/:id
pub async fn update_day(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<TrainingDayId>,
    Json(req): Json<UpdateTrainingDayRequest>,
) -> Response {
    let cmd = UpdateTrainingDayCommand {
        id,
        weekday: req.weekday,
        name: req.name,
        notes: req.notes,
    };
    match handlers.update_day.handle(cmd).await {
        Ok(day) => (StatusCode::OK, Json(day)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/exercises
pub async fn add_exercise(
    State(handlers): State<RoutineHandlers>,
    Json(req): Json<ExerciseRequest>,
) -> Response {
    let cmd = AddExerciseCommand {
        day_id: req.day_id,
        exercise_id: req.exercise_id,
        order: req.order,
        sets: req.sets,
        reps: req.reps,
        rest: req.rest,
        set_kind: req.set_kind,
        notes: req.notes,
    };
    match handlers.add_exercise.handle(cmd).await {
        Ok(assignment) => (StatusCode::CREATED, Json(assignment)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/exercises/:id
pub async fn update_exercise(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<AssignmentId>,
    Json(req): Json<UpdateExerciseRequest>,
) -> Response {
    let cmd = UpdateExerciseCommand {
        id,
        order: req.order,
        sets: req.sets,
        reps: req.reps,
        rest: req.rest,
        set_kind: req.set_kind,
        notes: req.notes,
    };
    match handlers.update_exercise.handle(cmd).await {
        Ok(assignment) => (StatusCode::OK, Json(assignment)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/exercises/:id
pub async fn remove_exercise(
    State(handlers): State<RoutineHandlers>,
    Path(id): Path<AssignmentId>,
) -> Response {
    match handlers.remove_exercise.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

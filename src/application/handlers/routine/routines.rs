//! Routine use cases: creation, state flips, listings, and the full
//! detail read that walks the week/day/assignment hierarchy.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::views::{
    assignment_view, day_detail_view, routine_detail_view, routine_list_view,
    routine_summary_view, week_detail_view, RoutineDetailView, RoutineListView,
    RoutineSummaryView, WeekDetailView,
};
use crate::domain::foundation::{ClientId, DomainError, RoutineId};
use crate::domain::routine::Routine;
use crate::ports::{
    ClientRepository, ExerciseCatalogRepository, RoutineFilter, RoutineRepository,
};

use super::super::shared::{require_client, require_routine};

/// Command to create a routine for a client.
#[derive(Debug, Clone)]
pub struct CreateRoutineCommand {
    pub client_id: ClientId,
    pub name: String,
    pub objective: String,
    pub start_date: NaiveDate,
    /// Defaults to four weeks after the start when absent.
    pub end_date: Option<NaiveDate>,
    pub notes: String,
    pub today: NaiveDate,
}

/// Handler for creating routines.
pub struct CreateRoutineHandler {
    routines: Arc<dyn RoutineRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl CreateRoutineHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { routines, clients }
    }

    #[tracing::instrument(skip(self, cmd), fields(client_id = %cmd.client_id))]
    pub async fn handle(&self, cmd: CreateRoutineCommand) -> Result<Routine, DomainError> {
        let client = require_client(self.clients.as_ref(), &cmd.client_id).await?;
        let routine = Routine::create(
            RoutineId::new(),
            client.id,
            cmd.name,
            cmd.objective,
            cmd.start_date,
            cmd.end_date,
            cmd.notes,
            cmd.today,
        )?;
        self.routines.create_routine(&routine).await?;
        tracing::info!(routine_id = %routine.id, "routine created");
        Ok(routine)
    }
}

/// Handler for activating or deactivating a routine.
pub struct SetRoutineActiveHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl SetRoutineActiveHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, id: RoutineId, active: bool) -> Result<Routine, DomainError> {
        let mut routine = require_routine(self.routines.as_ref(), &id).await?;
        if active {
            routine.activate();
        } else {
            routine.deactivate();
        }
        self.routines.update_routine(&routine).await?;
        tracing::info!(routine_id = %routine.id, active, "routine flag changed");
        Ok(routine)
    }
}

/// Query for routine listings.
#[derive(Debug, Clone)]
pub struct ListRoutinesQuery {
    pub filter: RoutineFilter,
    pub today: NaiveDate,
}

/// Handler for routine listings with client info joined in.
pub struct ListRoutinesHandler {
    routines: Arc<dyn RoutineRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl ListRoutinesHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { routines, clients }
    }

    pub async fn handle(
        &self,
        query: ListRoutinesQuery,
    ) -> Result<Vec<RoutineListView>, DomainError> {
        let routines = self.routines.list_routines(&query.filter).await?;
        let mut views = Vec::with_capacity(routines.len());
        for routine in &routines {
            let client = self.clients.find_by_id(&routine.client_id).await?;
            let week_count = self.routines.list_weeks(&routine.id).await?.len();
            views.push(routine_list_view(
                routine,
                client.as_ref().map(|c| c.full_name()),
                client.as_ref().map(|c| c.national_id.to_string()),
                week_count,
                query.today,
            ));
        }
        Ok(views)
    }
}

/// Handler for the hierarchy-free routine summary. Totals are counted by
/// walking the stored weeks and days without loading catalog joins.
pub struct GetRoutineSummaryHandler {
    routines: Arc<dyn RoutineRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl GetRoutineSummaryHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { routines, clients }
    }

    pub async fn handle(
        &self,
        id: RoutineId,
        today: NaiveDate,
    ) -> Result<RoutineSummaryView, DomainError> {
        let routine = require_routine(self.routines.as_ref(), &id).await?;
        let client = self.clients.find_by_id(&routine.client_id).await?;

        let weeks = self.routines.list_weeks(&routine.id).await?;
        let mut total_exercises = 0;
        for week in &weeks {
            for day in self.routines.list_days(&week.id).await? {
                total_exercises += self.routines.list_assignments(&day.id).await?.len();
            }
        }

        Ok(routine_summary_view(
            &routine,
            client.map(|c| c.full_name()),
            weeks.len(),
            total_exercises,
            today,
        ))
    }
}

/// Query for the full routine detail.
#[derive(Debug, Clone)]
pub struct GetRoutineQuery {
    pub id: RoutineId,
    pub today: NaiveDate,
}

/// Handler assembling the nested routine detail: weeks ordered by
/// number, days by weekday, assignments in execution order, with every
/// derived value computed at `today`.
pub struct GetRoutineHandler {
    routines: Arc<dyn RoutineRepository>,
    clients: Arc<dyn ClientRepository>,
    catalog: Arc<dyn ExerciseCatalogRepository>,
}

impl GetRoutineHandler {
    pub fn new(
        routines: Arc<dyn RoutineRepository>,
        clients: Arc<dyn ClientRepository>,
        catalog: Arc<dyn ExerciseCatalogRepository>,
    ) -> Self {
        Self {
            routines,
            clients,
            catalog,
        }
    }

    pub async fn handle(&self, query: GetRoutineQuery) -> Result<RoutineDetailView, DomainError> {
        let routine = require_routine(self.routines.as_ref(), &query.id).await?;
        let client = self.clients.find_by_id(&routine.client_id).await?;

        let mut weeks: Vec<WeekDetailView> = Vec::new();
        for week in self.routines.list_weeks(&routine.id).await? {
            let mut days = Vec::new();
            for day in self.routines.list_days(&week.id).await? {
                let mut exercises = Vec::new();
                for assignment in self.routines.list_assignments(&day.id).await? {
                    let entry = self.catalog.find_by_id(&assignment.exercise_id).await?;
                    exercises.push(assignment_view(&assignment, entry.as_ref()));
                }
                days.push(day_detail_view(&day, exercises));
            }
            weeks.push(week_detail_view(&week, days));
        }

        Ok(routine_detail_view(
            &routine,
            client.as_ref().map(|c| c.full_name()),
            client.as_ref().map(|c| c.national_id.to_string()),
            weeks,
            query.today,
        ))
    }
}

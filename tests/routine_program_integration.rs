//! Integration tests for the four-week routine builder.
//!
//! These tests drive the real use-case handlers against the in-memory
//! stores and verify the end-to-end flow:
//! 1. Client and catalog entries are seeded
//! 2. Routine, weeks, days, and assignments are built up
//! 3. The detail read returns the hierarchy ordered and joined
//! 4. Catalog entries in use cannot be deleted

mod common;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use gym_admin::adapters::memory::{
    InMemoryCatalogStore, InMemoryClientStore, InMemoryRoutineStore,
};
use gym_admin::application::handlers::routine::{
    AddExerciseCommand, AddExerciseHandler, AddTrainingDayCommand, AddTrainingDayHandler,
    AddWeekCommand, AddWeekHandler, CreateCatalogEntryCommand, CreateCatalogEntryHandler,
    CreateRoutineCommand, CreateRoutineHandler, DeleteCatalogEntryHandler, GetRoutineHandler,
    GetRoutineQuery, ListCatalogHandler, RemoveExerciseHandler,
};
use gym_admin::domain::client::{Client, ClientDraft};
use gym_admin::domain::foundation::{ClientId, ErrorCode};
use gym_admin::domain::routine::{
    ExerciseCatalogEntry, ExerciseCategory, MuscleGroup, SetKind,
};
use gym_admin::ports::{CatalogFilter, ClientRepository};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    clients: Arc<InMemoryClientStore>,
    catalog: Arc<InMemoryCatalogStore>,
    routines: Arc<InMemoryRoutineStore>,
    client_id: ClientId,
}

async fn fixture() -> Fixture {
    common::init_tracing();
    let clients = Arc::new(InMemoryClientStore::new());
    let catalog = Arc::new(InMemoryCatalogStore::new());
    let routines = Arc::new(InMemoryRoutineStore::new());

    let client = Client::create(
        ClientId::new(),
        ClientDraft {
            first_name: "Marcos".into(),
            last_name: "Ferreyra".into(),
            national_id: "30111222".into(),
            email: "marcos@example.com".into(),
            phone: String::new(),
            emergency_contact: String::new(),
            birth_date: date(1993, 4, 12),
            address: String::new(),
            notes: String::new(),
        },
        Utc::now(),
    )
    .unwrap();
    clients.create(&client).await.unwrap();

    Fixture {
        client_id: client.id,
        clients,
        catalog,
        routines,
    }
}

async fn seed_entry(
    fx: &Fixture,
    name: &str,
    muscle_group: MuscleGroup,
) -> ExerciseCatalogEntry {
    CreateCatalogEntryHandler::new(fx.catalog.clone())
        .handle(CreateCatalogEntryCommand {
            name: name.into(),
            description: String::new(),
            category: ExerciseCategory::Strength,
            muscle_group,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn full_program_builds_and_reads_back_ordered() {
    let fx = fixture().await;
    let squat = seed_entry(&fx, "Back squat", MuscleGroup::Legs).await;
    let bench = seed_entry(&fx, "Bench press", MuscleGroup::Chest).await;

    let start = date(2024, 3, 4);
    let routine = CreateRoutineHandler::new(fx.routines.clone(), fx.clients.clone())
        .handle(CreateRoutineCommand {
            client_id: fx.client_id,
            name: "Strength block".into(),
            objective: "strength".into(),
            start_date: start,
            end_date: None,
            notes: String::new(),
            today: start,
        })
        .await
        .unwrap();
    assert_eq!(routine.end_date, date(2024, 4, 1));

    // Four weeks, added out of order; the read sorts them.
    let add_week = AddWeekHandler::new(fx.routines.clone());
    let mut week1 = None;
    for number in [2u8, 4, 1, 3] {
        let week = add_week
            .handle(AddWeekCommand {
                routine_id: routine.id,
                number,
                notes: String::new(),
            })
            .await
            .unwrap();
        if number == 1 {
            week1 = Some(week);
        }
    }
    let week1 = week1.unwrap();

    let add_day = AddTrainingDayHandler::new(fx.routines.clone());
    add_day
        .handle(AddTrainingDayCommand {
            week_id: week1.id,
            weekday: 3,
            name: "Pull".into(),
            notes: String::new(),
        })
        .await
        .unwrap();
    let monday = add_day
        .handle(AddTrainingDayCommand {
            week_id: week1.id,
            weekday: 1,
            name: "Push".into(),
            notes: String::new(),
        })
        .await
        .unwrap();

    let add_exercise = AddExerciseHandler::new(fx.routines.clone(), fx.catalog.clone());
    add_exercise
        .handle(AddExerciseCommand {
            day_id: monday.id,
            exercise_id: bench.id,
            order: 2,
            sets: Some(4),
            reps: "6-8".into(),
            rest: "120s".into(),
            set_kind: SetKind::Normal,
            notes: String::new(),
        })
        .await
        .unwrap();
    add_exercise
        .handle(AddExerciseCommand {
            day_id: monday.id,
            exercise_id: squat.id,
            order: 1,
            sets: None,
            reps: "5".into(),
            rest: "180s".into(),
            set_kind: SetKind::Normal,
            notes: String::new(),
        })
        .await
        .unwrap();

    // Read at the midpoint of the four-week window.
    let detail = GetRoutineHandler::new(
        fx.routines.clone(),
        fx.clients.clone(),
        fx.catalog.clone(),
    )
    .handle(GetRoutineQuery {
        id: routine.id,
        today: date(2024, 3, 18),
    })
    .await
    .unwrap();

    assert_eq!(detail.client_name.as_deref(), Some("Marcos Ferreyra"));
    assert_eq!(detail.total_weeks, 4);
    assert_eq!(detail.total_days, 2);
    assert_eq!(detail.total_exercises, 2);
    assert_eq!(detail.progress, 50.0);
    assert_eq!(detail.state_label, "In progress");

    let numbers: Vec<u8> = detail.weeks.iter().map(|w| w.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);

    let first_week = &detail.weeks[0];
    assert_eq!(first_week.day_count, 2);
    let weekdays: Vec<u8> = first_week.days.iter().map(|d| d.weekday).collect();
    assert_eq!(weekdays, vec![1, 3]);

    let push_day = &first_week.days[0];
    let orders: Vec<u32> = push_day.exercises.iter().map(|e| e.order).collect();
    assert_eq!(orders, vec![1, 2]);
    assert_eq!(push_day.exercises[0].exercise_name.as_deref(), Some("Back squat"));
    assert_eq!(push_day.exercises[0].sets, 3);
    assert_eq!(push_day.exercises[1].sets, 4);
}

#[tokio::test]
async fn fifth_week_is_rejected() {
    let fx = fixture().await;
    let start = date(2024, 3, 4);
    let routine = CreateRoutineHandler::new(fx.routines.clone(), fx.clients.clone())
        .handle(CreateRoutineCommand {
            client_id: fx.client_id,
            name: "Block".into(),
            objective: "strength".into(),
            start_date: start,
            end_date: None,
            notes: String::new(),
            today: start,
        })
        .await
        .unwrap();

    let add_week = AddWeekHandler::new(fx.routines.clone());
    for number in 1u8..=4 {
        add_week
            .handle(AddWeekCommand {
                routine_id: routine.id,
                number,
                notes: String::new(),
            })
            .await
            .unwrap();
    }
    let err = add_week
        .handle(AddWeekCommand {
            routine_id: routine.id,
            number: 5,
            notes: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OutOfRange);
}

#[tokio::test]
async fn referenced_catalog_entry_cannot_be_deleted() {
    let fx = fixture().await;
    let squat = seed_entry(&fx, "Back squat", MuscleGroup::Legs).await;

    let start = date(2024, 3, 4);
    let routine = CreateRoutineHandler::new(fx.routines.clone(), fx.clients.clone())
        .handle(CreateRoutineCommand {
            client_id: fx.client_id,
            name: "Block".into(),
            objective: "strength".into(),
            start_date: start,
            end_date: None,
            notes: String::new(),
            today: start,
        })
        .await
        .unwrap();
    let week = AddWeekHandler::new(fx.routines.clone())
        .handle(AddWeekCommand {
            routine_id: routine.id,
            number: 1,
            notes: String::new(),
        })
        .await
        .unwrap();
    let day = AddTrainingDayHandler::new(fx.routines.clone())
        .handle(AddTrainingDayCommand {
            week_id: week.id,
            weekday: 1,
            name: "Legs".into(),
            notes: String::new(),
        })
        .await
        .unwrap();
    let assignment = AddExerciseHandler::new(fx.routines.clone(), fx.catalog.clone())
        .handle(AddExerciseCommand {
            day_id: day.id,
            exercise_id: squat.id,
            order: 1,
            sets: None,
            reps: "5".into(),
            rest: "180s".into(),
            set_kind: SetKind::Normal,
            notes: String::new(),
        })
        .await
        .unwrap();

    let delete = DeleteCatalogEntryHandler::new(fx.catalog.clone(), fx.routines.clone());
    let err = delete.handle(squat.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferencedInUse);

    // Once the assignment is gone, deletion goes through.
    RemoveExerciseHandler::new(fx.routines.clone())
        .handle(assignment.id)
        .await
        .unwrap();
    delete.handle(squat.id).await.unwrap();

    let remaining = ListCatalogHandler::new(fx.catalog.clone())
        .handle(CatalogFilter::default())
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

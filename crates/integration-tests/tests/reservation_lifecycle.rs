//! Create / update / cancel flows through the reservation service

mod common;

use common::{date, request, request_on, Engine, BACKENDS};
use std::sync::Arc;
use tablebook_core::domain::EngineConfig;
use tablebook_core::error::AppError;
use tablebook_infra_sqlite::{
    create_pool, run_migrations, SqliteReservationRepository, SqliteTableRepository,
};

#[tokio::test]
async fn test_move_to_free_slot_releases_old_one() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4]).await;
        let booked = engine.service.create(request("18:00", 4), Some(7)).await.unwrap();
        assert!(!engine.is_available("18:00", 4).await);

        let moved = engine
            .service
            .update(booked.id, request("20:00", 4))
            .await
            .unwrap();

        assert_eq!(moved.id, booked.id);
        assert_eq!(moved.time.to_string(), "20:00");
        assert_eq!(moved.user_id, Some(7), "{backend:?}");
        assert!(engine.is_available("18:00", 4).await);
        assert!(!engine.is_available("20:00", 4).await);
    }
}

#[tokio::test]
async fn test_move_into_taken_slot_is_rejected() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4]).await;
        let first = engine.service.create(request("18:00", 2), None).await.unwrap();
        let second = engine.service.create(request("21:00", 2), None).await.unwrap();

        let err = engine
            .service
            .update(second.id, request("18:30", 2))
            .await
            .unwrap_err();
        assert!(err.is_capacity_conflict(), "{backend:?}: {err}");

        // Nothing changed on either side
        let unchanged = engine.service.get(second.id).await.unwrap();
        assert_eq!(unchanged.time.to_string(), "21:00");
        assert_eq!(engine.service.get(first.id).await.unwrap(), first);
    }
}

#[tokio::test]
async fn test_contact_edit_succeeds_even_when_slot_is_overbooked() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[2]).await;
        // Two rows in one table's window, written past the checker
        let kept = engine.reservations.insert(&request("19:00", 2), None).await.unwrap();
        engine.reservations.insert(&request("19:00", 2), None).await.unwrap();

        let mut edit = request("19:00", 2);
        edit.phone = "5559998888".to_string();
        edit.special_requests = Some("High chair".to_string());

        let updated = engine.service.update(kept.id, edit).await.unwrap();
        assert_eq!(updated.phone, "5559998888");
        assert_eq!(updated.special_requests.as_deref(), Some("High chair"));
    }
}

#[tokio::test]
async fn test_growing_party_checks_against_other_bookings() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[2, 6]).await;
        let booked = engine.service.create(request("19:00", 2), None).await.unwrap();

        // Only the six-top seats five and nothing else holds it
        let grown = engine.service.update(booked.id, request("19:00", 5)).await.unwrap();
        assert_eq!(grown.guests, 5);

        let err = engine
            .service
            .update(booked.id, request("19:00", 7))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoEligibleTable { guests: 7 }), "{backend:?}");
    }
}

#[tokio::test]
async fn test_cancel_frees_capacity() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4]).await;
        let booked = engine.service.create(request("19:00", 4), None).await.unwrap();
        assert!(engine.service.create(request("19:30", 2), None).await.is_err());

        engine.service.delete(booked.id).await.unwrap();

        assert!(engine.service.get(booked.id).await.is_err());
        engine.service.create(request("19:30", 2), None).await.unwrap();
    }
}

#[tokio::test]
async fn test_missing_reservation_is_not_found() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4]).await;

        let update = engine.service.update(999, request("19:00", 2)).await;
        assert!(matches!(update, Err(AppError::NotFound(_))), "{backend:?}");

        let delete = engine.service.delete(999).await;
        assert!(matches!(delete, Err(AppError::NotFound(_))), "{backend:?}");

        let get = engine.service.get(999).await;
        assert!(matches!(get, Err(AppError::NotFound(_))), "{backend:?}");
    }
}

#[tokio::test]
async fn test_listing_by_owner() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4, 4, 4]).await;
        let tomorrow = date().succ_opt().unwrap();

        engine.service.create(request("18:00", 2), Some(1)).await.unwrap();
        engine.service.create(request("19:00", 2), Some(2)).await.unwrap();
        engine.service.create(request_on(tomorrow, "17:30", 3), Some(1)).await.unwrap();
        engine.service.create(request("20:00", 2), None).await.unwrap();

        let mine = engine.service.list_for_user(1).await.unwrap();
        assert_eq!(mine.len(), 2, "{backend:?}");
        assert!(mine.iter().all(|r| r.user_id == Some(1)));

        assert_eq!(engine.service.list_all().await.unwrap().len(), 4);
        assert!(engine.service.list_for_user(42).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_bookings_survive_reopening_the_database() {
    let path = std::env::temp_dir().join(format!("{}-lifecycle.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());

    let booked_id = {
        let pool = create_pool(&url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let engine = Engine::over(
            Arc::new(SqliteTableRepository::new(pool.clone())),
            Arc::new(SqliteReservationRepository::new(pool.clone())),
            EngineConfig::default(),
        );
        engine
            .tables
            .insert_table(&tablebook_core::domain::NewTable::new("Table 1", 4, "Main"))
            .await
            .unwrap();
        let booked = engine.service.create(request("19:00", 4), Some(3)).await.unwrap();
        pool.close().await;
        booked.id
    };

    let pool = create_pool(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let engine = Engine::over(
        Arc::new(SqliteTableRepository::new(pool.clone())),
        Arc::new(SqliteReservationRepository::new(pool.clone())),
        EngineConfig::default(),
    );

    let reloaded = engine.service.get(booked_id).await.unwrap();
    assert_eq!(reloaded.user_id, Some(3));
    assert!(!engine.is_available("19:00", 2).await);

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}

//! Availability engine scenarios, run against both storage backends

mod common;

use common::{all_slots, at, date, request, strings, Backend, Engine, BACKENDS};
use tablebook_core::application::Availability;
use tablebook_core::domain::{CapacityModel, EngineConfig, NewTable};

/// Scenario A: sample floor plan, empty book, every slot open
#[tokio::test]
async fn test_empty_book_offers_every_slot() {
    for backend in BACKENDS {
        let engine = Engine::with_sample_tables(backend, EngineConfig::default()).await;

        let times = engine.slots.available_times(date(), 2).await.unwrap();
        assert_eq!(strings(&times), all_slots(), "{backend:?}");
    }
}

/// Scenario B: nine overlapping bookings fill nine eligible tables
#[tokio::test]
async fn test_window_fills_after_nine_bookings() {
    for backend in BACKENDS {
        let engine = Engine::with_sample_tables(backend, EngineConfig::default()).await;

        engine.service.create(request("19:00", 2), None).await.unwrap();
        let verdict = engine
            .checker
            .check(date(), at("19:00"), 2, None)
            .await
            .unwrap();
        assert_eq!(
            verdict,
            Availability::Available {
                eligible: 9,
                occupied: 1
            }
        );

        // Spread across the window around 19:00
        for time in ["18:00", "18:30", "19:00", "19:30", "20:00", "20:15", "18:45", "19:45"] {
            engine.service.create(request(time, 2), None).await.unwrap();
        }

        assert!(!engine.is_available("19:00", 2).await, "{backend:?}");
        let err = engine
            .service
            .create(request("19:00", 2), None)
            .await
            .unwrap_err();
        assert!(err.is_capacity_conflict());

        // Outside every booking's window the room is empty again
        assert!(engine.is_available("21:30", 2).await);
        assert!(engine.is_available("17:00", 2).await);
    }
}

/// Scenario C: nobody seats thirteen, whatever the book looks like
#[tokio::test]
async fn test_party_larger_than_any_table() {
    for backend in BACKENDS {
        let engine = Engine::with_sample_tables(backend, EngineConfig::default()).await;

        assert_eq!(
            engine.checker.check(date(), at("19:00"), 13, None).await.unwrap(),
            Availability::NoEligibleTable
        );
        assert!(engine.slots.available_times(date(), 13).await.unwrap().is_empty());

        engine.service.create(request("17:00", 2), None).await.unwrap();
        assert!(!engine.is_available("21:30", 13).await);
    }
}

#[tokio::test]
async fn test_window_boundary_is_strict() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4]).await;
        engine.service.create(request("18:00", 2), None).await.unwrap();

        // 89 minutes apart contend, 90 do not
        assert!(!engine.is_available("19:29", 2).await, "{backend:?}");
        assert!(engine.is_available("19:30", 2).await, "{backend:?}");
        assert!(!engine.is_available("16:31", 2).await, "{backend:?}");
        assert!(engine.is_available("16:30", 2).await, "{backend:?}");
    }
}

#[tokio::test]
async fn test_reservation_can_reclaim_its_own_slot() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[4]).await;
        let booked = engine.service.create(request("19:00", 4), None).await.unwrap();

        assert!(!engine.is_available("19:00", 4).await);
        assert!(engine
            .checker
            .is_available(date(), at("19:00"), 4, Some(booked.id))
            .await
            .unwrap());
    }
}

#[tokio::test]
async fn test_adding_tables_never_removes_slots() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[2, 4]).await;
        // Written straight to storage: the 19:00 four-top would be refused otherwise
        for (time, guests) in [("18:00", 2), ("19:00", 4), ("20:30", 2)] {
            engine.reservations.insert(&request(time, guests), None).await.unwrap();
        }

        let mut previous = engine.slots.available_times(date(), 2).await.unwrap();
        for capacity in [2, 6, 4] {
            engine
                .tables
                .insert_table(&NewTable::new("Extra", capacity, "Main"))
                .await
                .unwrap();
            let current = engine.slots.available_times(date(), 2).await.unwrap();
            assert!(
                previous.iter().all(|t| current.contains(t)),
                "{backend:?}: {previous:?} -> {current:?}"
            );
            previous = current;
        }
        assert_eq!(strings(&previous), all_slots());
    }
}

#[tokio::test]
async fn test_enumeration_is_idempotent() {
    for backend in BACKENDS {
        let engine = Engine::with_capacities(backend, EngineConfig::default(), &[2, 4]).await;
        engine.service.create(request("18:30", 2), None).await.unwrap();
        engine.service.create(request("19:00", 2), None).await.unwrap();

        let first = engine.slots.available_times(date(), 2).await.unwrap();
        let second = engine.slots.available_times(date(), 2).await.unwrap();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test]
async fn test_inactive_tables_do_not_count() {
    for backend in BACKENDS {
        let engine = Engine::new(backend, EngineConfig::default()).await;
        engine
            .tables
            .insert_table(&NewTable::new("Closed", 8, "Main").inactive())
            .await
            .unwrap();

        assert!(!engine.is_available("19:00", 2).await);

        let open = engine
            .tables
            .insert_table(&NewTable::new("Open", 2, "Main"))
            .await
            .unwrap();
        assert!(engine.is_available("19:00", 2).await);

        engine
            .tables
            .update_table(open.id, &NewTable::new("Open", 2, "Main").inactive())
            .await
            .unwrap();
        assert!(!engine.is_available("19:00", 2).await);
    }
}

#[tokio::test]
async fn test_custom_hours_and_window() {
    let config = EngineConfig {
        opening_hour: 11,
        closing_hour: 14,
        slot_minutes: 60,
        overlap_minutes: 60,
        ..EngineConfig::default()
    };
    let engine = Engine::with_capacities(Backend::Memory, config, &[2]).await;
    engine.service.create(request("12:00", 2), None).await.unwrap();

    let times = engine.slots.available_times(date(), 2).await.unwrap();
    assert_eq!(strings(&times), vec!["11:00", "13:00"]);
}

/// Headcount lets a small party "use up" a large table only in count;
/// table matching sees that the two-top cannot hold the four-top's party.
#[tokio::test]
async fn test_capacity_models_diverge_on_mixed_sizes() {
    for backend in BACKENDS {
        let headcount = Engine::with_capacities(backend, EngineConfig::default(), &[2, 4]).await;
        headcount.reservations.insert(&request("19:00", 2), None).await.unwrap();
        headcount.reservations.insert(&request("19:00", 2), None).await.unwrap();
        // 2 eligible, 2 occupying: full under both models
        assert!(!headcount.is_available("19:00", 2).await);

        let strict_config = EngineConfig {
            capacity_model: CapacityModel::TableMatching,
            ..EngineConfig::default()
        };
        let headcount = Engine::with_capacities(backend, EngineConfig::default(), &[2, 2, 4]).await;
        let strict = Engine::with_capacities(backend, strict_config, &[2, 2, 4]).await;
        for engine in [&headcount, &strict] {
            engine.reservations.insert(&request("19:00", 3), None).await.unwrap();
            engine.reservations.insert(&request("19:00", 3), None).await.unwrap();
        }

        // Two parties of three both need the single four-top
        assert!(headcount.is_available("19:00", 2).await, "{backend:?}");
        assert!(!strict.is_available("19:00", 2).await, "{backend:?}");
    }
}

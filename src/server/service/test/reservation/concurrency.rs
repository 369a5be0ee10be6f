use super::*;
use std::time::Duration as StdDuration;
use tokio::time::timeout;

/// Tests racing bookings of the same interval on one berth.
///
/// Verifies that concurrent requests are serialized so that exactly one booking
/// wins and every other request is rejected as a conflict.
///
/// Expected: one Ok, the rest Err(Conflict), one stored reservation
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_overlapping_bookings_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;

    let mut handles = Vec::new();
    for offset in 0..8 {
        let db = db.clone();
        let locks = locks.clone();
        let number = catway.number;
        handles.push(tokio::spawn(async move {
            let service = ReservationService::new(&db, &locks);
            service.create(booking(number, 2 + offset % 2, 6)).await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(err) => return Err(err),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);

    let service = ReservationService::new(db, &locks);
    assert_eq!(service.list_for_berth(catway.number).await?.len(), 1);

    Ok(())
}

/// Tests racing bookings on different berths.
///
/// Expected: every booking succeeds
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_on_different_berths_all_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let mut numbers = Vec::new();
    for _ in 0..4 {
        numbers.push(factory::create_catway(db).await?.number);
    }

    let mut handles = Vec::new();
    for number in numbers {
        let db = db.clone();
        let locks = locks.clone();
        handles.push(tokio::spawn(async move {
            ReservationService::new(&db, &locks)
                .create(booking(number, 2, 6))
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap()?;
    }

    let service = ReservationService::new(db, &locks);
    assert_eq!(service.list_all().await?.len(), 4);

    Ok(())
}

/// Tests that a booking waits while another writer holds the berth.
///
/// Verifies that `create` takes the berth lock before scanning: while the lock is
/// held elsewhere the booking cannot finish, and it completes once released.
///
/// Expected: the first attempt times out with nothing stored, the retry is Ok
#[tokio::test]
async fn booking_waits_for_berth_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;
    let service = ReservationService::new(db, &locks);

    let guard = locks.acquire(catway.number).await;
    let blocked = timeout(
        StdDuration::from_millis(100),
        service.create(booking(catway.number, 2, 6)),
    )
    .await;
    assert!(blocked.is_err());
    assert!(service.list_for_berth(catway.number).await?.is_empty());

    drop(guard);
    let created = timeout(
        StdDuration::from_millis(500),
        service.create(booking(catway.number, 2, 6)),
    )
    .await
    .unwrap()?;
    assert_eq!(created.berth_number, catway.number);

    Ok(())
}

/// Tests that moving a booking waits while another writer holds the berth.
///
/// Expected: the move times out leaving the booking unchanged, the retry is Ok
#[tokio::test]
async fn move_waits_for_berth_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;
    let service = ReservationService::new(db, &locks);
    let reservation = service.create(booking(catway.number, 2, 6)).await?;

    let moved = || UpdateReservationParams {
        check_out: Some(days_from_now(8)),
        ..Default::default()
    };

    let guard = locks.acquire(catway.number).await;
    let blocked = timeout(
        StdDuration::from_millis(100),
        service.update(reservation.id, moved()),
    )
    .await;
    assert!(blocked.is_err());
    assert_eq!(service.get_by_id(reservation.id).await?.check_out, day(6));

    drop(guard);
    let updated = timeout(
        StdDuration::from_millis(500),
        service.update(reservation.id, moved()),
    )
    .await
    .unwrap()?;
    assert_eq!(updated.check_out, day(8));

    Ok(())
}

/// Tests that a held lock on one berth does not delay bookings of another.
///
/// Expected: Ok within the timeout
#[tokio::test]
async fn lock_on_other_berth_does_not_block_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let held = factory::create_catway(db).await?;
    let free = factory::create_catway(db).await?;
    let service = ReservationService::new(db, &locks);

    let _guard = locks.acquire(held.number).await;
    let created = timeout(
        StdDuration::from_millis(500),
        service.create(booking(free.number, 2, 6)),
    )
    .await
    .unwrap()?;

    assert_eq!(created.berth_number, free.number);

    Ok(())
}

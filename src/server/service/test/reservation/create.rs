use super::*;

/// Tests booking a free berth.
///
/// Expected: Ok with reservation stored on the berth
#[tokio::test]
async fn books_free_berth() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    let reservation = service.create(booking(catway.number, 2, 5)).await?;

    assert_eq!(reservation.berth_number, catway.number);
    assert_eq!(reservation.client_name, "Jane Doe");
    assert_eq!(reservation.check_in, day(2));
    assert_eq!(reservation.check_out, day(5));

    let listed = service.list_for_berth(catway.number).await?;
    assert_eq!(listed, vec![reservation]);

    Ok(())
}

/// Tests booking an interval that overlaps an existing booking.
///
/// Expected: Err(Conflict) with only the first booking stored
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    service.create(booking(catway.number, 2, 5)).await?;
    let result = service.create(booking(catway.number, 4, 7)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list_for_berth(catway.number).await?.len(), 1);

    Ok(())
}

/// Tests booking right after an existing booking ends.
///
/// Expected: Ok with both bookings stored
#[tokio::test]
async fn accepts_back_to_back_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    service.create(booking(catway.number, 2, 5)).await?;
    service.create(booking(catway.number, 5, 8)).await?;

    assert_eq!(service.list_for_berth(catway.number).await?.len(), 2);

    Ok(())
}

/// Tests booking the same interval on two different berths.
///
/// Expected: Ok for both
#[tokio::test]
async fn berths_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let first = factory::create_catway(db).await?;
    let second = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    service.create(booking(first.number, 2, 5)).await?;
    service.create(booking(second.number, 2, 5)).await?;

    assert_eq!(service.list_all().await?.len(), 2);

    Ok(())
}

/// Tests booking a berth number without a catway.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_berth() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let service = ReservationService::new(db, &locks);
    let result = service.create(booking(999, 2, 5)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the order in which booking rules are checked.
///
/// Verifies that missing fields are reported before an unknown berth, and an
/// unknown berth before unparsable dates.
///
/// Expected: Err(Validation) then Err(NotFound)
#[tokio::test]
async fn checks_presence_before_berth_before_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let service = ReservationService::new(db, &locks);

    let missing = service
        .create(CreateReservationParams {
            boat_name: Some("  ".to_string()),
            ..booking(999, 2, 5)
        })
        .await;
    let bad_date_unknown_berth = service
        .create(CreateReservationParams {
            check_in: Some("not a date".to_string()),
            ..booking(999, 2, 5)
        })
        .await;

    assert!(matches!(missing, Err(AppError::Validation(_))));
    assert!(matches!(bad_date_unknown_berth, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking with invalid dates.
///
/// Verifies unparsable dates, an inverted interval, an empty interval and a
/// check-in in the past.
///
/// Expected: Err(Validation) for every case
#[tokio::test]
async fn rejects_invalid_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;
    let number = catway.number;

    let service = ReservationService::new(db, &locks);
    let cases = [
        CreateReservationParams {
            check_out: Some("someday".to_string()),
            ..booking(number, 2, 5)
        },
        booking(number, 5, 2),
        booking(number, 3, 3),
        booking(number, -2, 3),
    ];

    for case in cases {
        let result = service.create(case).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
    assert!(service.list_for_berth(number).await?.is_empty());

    Ok(())
}

/// Tests booking with an oversized boat name.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_long_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .create(CreateReservationParams {
            boat_name: Some("b".repeat(101)),
            ..booking(catway.number, 2, 5)
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

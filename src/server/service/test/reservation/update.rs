use super::*;

/// Tests moving a booking onto an interval that overlaps only itself.
///
/// Expected: Ok with the new interval stored
#[tokio::test]
async fn moves_booking_over_its_own_interval() -> Result<(), AppError> {
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
    let updated = service
        .update(
            reservation.id,
            UpdateReservationParams {
                check_out: Some(days_from_now(7)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.check_in, day(2));
    assert_eq!(updated.check_out, day(7));

    Ok(())
}

/// Tests moving a booking onto another booking of the same berth.
///
/// Expected: Err(Conflict) with the booking unchanged
#[tokio::test]
async fn rejects_move_onto_other_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    service.create(booking(catway.number, 10, 12)).await?;
    let reservation = service.create(booking(catway.number, 2, 5)).await?;

    let result = service
        .update(
            reservation.id,
            UpdateReservationParams {
                check_out: Some(days_from_now(11)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_by_id(reservation.id).await?.check_out, day(5));

    Ok(())
}

/// Tests changing only the names of a booking that overlaps legacy data.
///
/// Verifies that the overlap scan only runs when dates change.
///
/// Expected: Ok with the client name updated
#[tokio::test]
async fn renames_without_scanning() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let catway = factory::create_catway(db).await?;
    let start = day(3);
    let first = factory::reservation::ReservationFactory::new(db, catway.number)
        .window(start, start + Duration::days(4))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, catway.number)
        .window(start + Duration::days(1), start + Duration::days(2))
        .build()
        .await?;

    let service = ReservationService::new(db, &locks);
    let updated = service
        .update(
            first.id,
            UpdateReservationParams {
                client_name: Some("  John Roe ".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.client_name, "John Roe");
    assert_eq!(updated.boat_name, first.boat_name);

    Ok(())
}

/// Tests an update that would invert the interval.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_inverted_interval() -> Result<(), AppError> {
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
    let result = service
        .update(
            reservation.id,
            UpdateReservationParams {
                check_in: Some(days_from_now(6)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Verifies that the missing reservation is reported before invalid input.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let service = ReservationService::new(db, &locks);
    let result = service
        .update(
            777,
            UpdateReservationParams {
                check_in: Some("garbage".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests moving a booking so that it starts in the past.
///
/// Verifies that the past-date rule only applies when booking.
///
/// Expected: Ok with the earlier check-in stored
#[tokio::test]
async fn allows_moving_into_the_past() -> Result<(), AppError> {
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
    let updated = service
        .update(
            reservation.id,
            UpdateReservationParams {
                check_in: Some(days_from_now(-2)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.check_in, day(-2));
    assert_eq!(updated.check_out, day(5));

    Ok(())
}

/// Tests reading the same reservation repeatedly.
///
/// Expected: identical results by id and through the berth
#[tokio::test]
async fn repeated_reads_return_same_reservation() -> Result<(), AppError> {
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

    let first = service.get_by_id(reservation.id).await?;
    let second = service.get_by_id(reservation.id).await?;
    assert_eq!(first, second);
    assert_eq!(first.id, reservation.id);
    assert_eq!(
        service.get_for_berth(catway.number, reservation.id).await?,
        first
    );
    assert_eq!(
        service.list_for_berth(catway.number).await?,
        service.list_for_berth(catway.number).await?
    );

    Ok(())
}

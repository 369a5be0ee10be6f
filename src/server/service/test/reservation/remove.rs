use super::*;

/// Tests deleting a reservation and booking its interval again.
///
/// Expected: Ok with the freed interval bookable
#[tokio::test]
async fn freed_interval_can_be_rebooked() -> Result<(), AppError> {
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

    let removed = service.remove(reservation.id).await?;
    assert_eq!(removed.id, reservation.id);
    assert!(matches!(
        service.get_by_id(reservation.id).await,
        Err(AppError::NotFound(_))
    ));

    service.create(booking(catway.number, 2, 5)).await?;

    Ok(())
}

/// Tests deleting a reservation through the wrong berth.
///
/// Expected: Err(NotFound) with the reservation kept
#[tokio::test]
async fn berth_scoped_delete_checks_berth() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BerthLocks::new();

    let (catway, reservation) = factory::helpers::create_catway_with_reservation(db).await?;
    let other = factory::create_catway(db).await?;

    let service = ReservationService::new(db, &locks);
    let result = service.remove_for_berth(other.number, reservation.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        service.get_for_berth(catway.number, reservation.id).await?.id,
        reservation.id
    );

    service.remove_for_berth(catway.number, reservation.id).await?;
    assert!(service.list_for_berth(catway.number).await?.is_empty());

    Ok(())
}

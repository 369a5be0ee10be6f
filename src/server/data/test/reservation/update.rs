use super::*;

/// Tests updating a reservation's names and window.
///
/// Expected: Ok with the new window and client name, boat name unchanged
#[tokio::test]
async fn updates_names_and_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_catway, reservation) = factory::helpers::create_catway_with_reservation(db).await?;
    let check_in = reservation.check_in + Duration::days(7);
    let window = BookingWindow::new(check_in, check_in + Duration::days(2)).unwrap();

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            reservation.clone(),
            ReservationChanges {
                client_name: Some("John Roe".to_string()),
                boat_name: None,
                window,
            },
        )
        .await?;

    assert_eq!(updated.id, reservation.id);
    assert_eq!(updated.client_name, "John Roe");
    assert_eq!(updated.boat_name, reservation.boat_name);
    assert_eq!(updated.check_in, window.check_in());
    assert_eq!(updated.check_out, window.check_out());

    Ok(())
}

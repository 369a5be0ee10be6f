use super::*;

/// Tests listing the reservations of a berth.
///
/// Verifies that only reservations of the requested berth are returned, latest
/// check-in first.
///
/// Expected: Ok with two reservations in descending check-in order
#[tokio::test]
async fn returns_berth_reservations_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catway = factory::create_catway(db).await?;
    let other = factory::create_catway(db).await?;
    let start = Utc::now() + Duration::days(1);

    let early = factory::reservation::ReservationFactory::new(db, catway.number)
        .window(start, start + Duration::days(2))
        .build()
        .await?;
    let late = factory::reservation::ReservationFactory::new(db, catway.number)
        .window(start + Duration::days(10), start + Duration::days(12))
        .build()
        .await?;
    factory::create_reservation(db, other.number).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_berth(catway.number).await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    Ok(())
}

/// Tests listing all reservations.
///
/// Verifies that reservations are grouped by berth number.
///
/// Expected: Ok with reservations of the lower berth first
#[tokio::test]
async fn returns_all_reservations_grouped_by_berth() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let high = factory::catway::CatwayFactory::new(db).number(20).build().await?;
    let low = factory::catway::CatwayFactory::new(db).number(2).build().await?;

    factory::create_reservation(db, high.number).await?;
    factory::create_reservation(db, low.number).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_all().await?;

    let berths: Vec<i32> = reservations.iter().map(|r| r.berth_number).collect();
    assert_eq!(berths, vec![2, 20]);

    Ok(())
}

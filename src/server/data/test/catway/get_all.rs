use super::*;

/// Tests listing catways.
///
/// Verifies that catways are returned ordered by berth number regardless of
/// insertion order.
///
/// Expected: Ok with catways sorted by number
#[tokio::test]
async fn returns_catways_ordered_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for number in [30, 10, 20] {
        factory::catway::CatwayFactory::new(db)
            .number(number)
            .build()
            .await?;
    }

    let repo = CatwayRepository::new(db);
    let catways = repo.get_all().await?;

    let numbers: Vec<i32> = catways.iter().map(|c| c.number).collect();
    assert_eq!(numbers, vec![10, 20, 30]);

    Ok(())
}

/// Tests listing catways on an empty harbor.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_catways() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatwayRepository::new(db);
    let catways = repo.get_all().await?;

    assert!(catways.is_empty());

    Ok(())
}

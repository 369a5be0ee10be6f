use super::*;

/// Tests the number check against another catway.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_number_of_other_catway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::CatwayFactory::new(db).number(5).build().await?;
    let other = factory::catway::CatwayFactory::new(db).number(6).build().await?;

    let repo = CatwayRepository::new(db);

    assert!(repo.number_taken(5, None).await?);
    assert!(repo.number_taken(5, Some(other.id)).await?);

    Ok(())
}

/// Tests the number check when the only match is the excluded catway.
///
/// Verifies that a catway keeping its own number is not reported as a duplicate.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_catway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catway = factory::catway::CatwayFactory::new(db).number(5).build().await?;

    let repo = CatwayRepository::new(db);

    assert!(!repo.number_taken(5, Some(catway.id)).await?);
    assert!(!repo.number_taken(7, None).await?);

    Ok(())
}

use super::*;

/// Tests creating a catway.
///
/// Verifies that the category is stored by its lowercase name and both
/// timestamps are set.
///
/// Expected: Ok with catway created
#[tokio::test]
async fn creates_catway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatwayRepository::new(db);
    let catway = repo
        .create(NewCatway {
            number: 4,
            category: CatwayCategory::Short,
            state: "freshly painted".to_string(),
        })
        .await?;

    assert_eq!(catway.number, 4);
    assert_eq!(catway.category, "short");
    assert_eq!(catway.state, "freshly painted");
    assert_eq!(catway.created_at, catway.updated_at);

    Ok(())
}

/// Tests creating a catway with a number already in use.
///
/// Verifies that the unique index on the berth number rejects the insert.
///
/// Expected: Err from the database
#[tokio::test]
async fn fails_for_duplicate_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_harbor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::CatwayFactory::new(db).number(9).build().await?;

    let repo = CatwayRepository::new(db);
    let result = repo
        .create(NewCatway {
            number: 9,
            category: CatwayCategory::Long,
            state: "ok".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

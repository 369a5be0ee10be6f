use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a stored address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("dockmaster@harbor.test")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("dockmaster@harbor.test").await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert!(repo.find_by_email("nobody@harbor.test").await?.is_none());

    Ok(())
}

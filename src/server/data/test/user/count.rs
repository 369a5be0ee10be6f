use super::*;

/// Tests counting staff users.
///
/// Expected: Ok(0) before and Ok(2) after inserting two users
#[tokio::test]
async fn counts_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}

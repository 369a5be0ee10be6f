use super::*;

/// Tests the email check.
///
/// Verifies that a user's own email is ignored when that user is excluded.
///
/// Expected: Ok(true) for other users, Ok(false) for the excluded owner
#[tokio::test]
async fn detects_email_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .email("owner@harbor.test")
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("owner@harbor.test", None).await?);
    assert!(repo.email_taken("owner@harbor.test", Some(other.id)).await?);
    assert!(!repo.email_taken("owner@harbor.test", Some(owner.id)).await?);
    assert!(!repo.email_taken("nobody@harbor.test", None).await?);

    Ok(())
}

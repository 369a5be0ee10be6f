use super::*;

/// Tests creating a staff user.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            name: "Ada".to_string(),
            email: "ada@harbor.test".to_string(),
            admin: true,
        })
        .await?;

    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@harbor.test");
    assert!(user.admin);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err from the unique index
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("dup@harbor.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(NewUser {
            name: "Other".to_string(),
            email: "dup@harbor.test".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

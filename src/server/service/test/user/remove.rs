use super::*;

/// Tests deleting another staff user.
///
/// Expected: Ok with user removed
#[tokio::test]
async fn removes_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    service.remove(user.id, admin.id).await?;

    assert!(matches!(
        service.get_by_id(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests a user deleting their own account.
///
/// Expected: Err(Validation) with the user kept
#[tokio::test]
async fn refuses_self_deletion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;

    let service = UserService::new(db);
    let result = service.remove(admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(service.get_by_id(admin.id).await?.id, admin.id);

    Ok(())
}

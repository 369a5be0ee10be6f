use super::*;

/// Tests issuing a login code for an existing user.
///
/// Expected: Ok with the code embedded in the login link
#[tokio::test]
async fn issues_code_with_login_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = login_codes();

    let user = factory::create_user(db).await?;

    let service = AuthService::new(db, &codes);
    let issued = service
        .issue_login(user.id, "http://localhost:3000")
        .await?;

    assert_eq!(issued.login_url.path(), "/api/auth/login");
    assert_eq!(
        issued.login_url.query(),
        Some(format!("code={}", issued.code).as_str())
    );

    Ok(())
}

/// Tests issuing a login code for a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = login_codes();

    let service = AuthService::new(db, &codes);
    let result = service.issue_login(31, "http://localhost:3000").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

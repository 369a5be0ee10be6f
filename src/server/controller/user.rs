use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, LoginCodeDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping staff endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all staff users.
///
/// # Access Control
/// - `Admin` - Only admins can manage staff
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Staff users, newest first", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).list_all().await?;
    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Create a staff user.
///
/// # Access Control
/// - `Admin` - Only admins can manage staff
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid fields or email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created staff user", body = UserDto),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a staff user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    responses(
        (status = 200, description = "The staff user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the provided fields of a staff user.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated staff user", body = UserDto),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a staff user through `PUT`.
///
/// Same semantics as `PATCH`: fields left out keep their stored value.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated staff user", body = UserDto),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_user(
    state: State<AppState>,
    session: Session,
    id: Path<i32>,
    payload: Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    update_user(state, session, id, payload).await
}

/// Delete a staff user.
///
/// Outstanding login codes of the user are revoked. Admins cannot delete their own
/// account.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted staff user", body = UserDto),
        (status = 400, description = "Attempted to delete own account", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).remove(id, admin.id).await?;
    state.login_codes.revoke_for_user(user.id).await;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Issue a one-time login code for a staff user.
///
/// # Returns
/// - `201 Created` - The code and the link that redeems it
/// - `404 Not Found` - User not found
#[utoipa::path(
    post,
    path = "/api/users/{id}/login-code",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    responses(
        (status = 201, description = "Login code issued", body = LoginCodeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_login_code(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let issued = AuthService::new(&state.db, &state.login_codes)
        .issue_login(id, &state.app_url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LoginCodeDto {
            code: issued.code,
            login_url: issued.login_url.to_string(),
            expires_in_seconds: state.login_codes.ttl().as_secs(),
        }),
    ))
}

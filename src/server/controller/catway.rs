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
        catway::{CatwayDto, CreateCatwayDto, UpdateCatwayDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::catway::{CreateCatwayParams, UpdateCatwayParams},
        service::catway::CatwayService,
        state::AppState,
    },
};

/// Tag for grouping catway endpoints in OpenAPI documentation
pub static CATWAY_TAG: &str = "catway";

/// List all catways.
///
/// # Access Control
/// Requires a signed-in staff user
///
/// # Returns
/// - `200 OK` - Catways ordered by number
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/catways",
    tag = CATWAY_TAG,
    responses(
        (status = 200, description = "Catways ordered by number", body = Vec<CatwayDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catways(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let catways = CatwayService::new(&state.db, &state.berth_locks)
        .list_all()
        .await?;

    let catways: Vec<CatwayDto> = catways.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(catways)))
}

/// Create a catway.
///
/// # Access Control
/// Requires a signed-in staff user
///
/// # Returns
/// - `201 Created` - The created catway
/// - `400 Bad Request` - Missing or invalid fields, or number already in use
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/catways",
    tag = CATWAY_TAG,
    request_body = CreateCatwayDto,
    responses(
        (status = 201, description = "Successfully created catway", body = CatwayDto),
        (status = 400, description = "Invalid catway data or duplicate number", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_catway(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCatwayDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let catway = CatwayService::new(&state.db, &state.berth_locks)
        .create(CreateCatwayParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(catway.into_dto())))
}

/// Get a catway by ID.
#[utoipa::path(
    get,
    path = "/api/catways/{id}",
    tag = CATWAY_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID")
    ),
    responses(
        (status = 200, description = "The catway", body = CatwayDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catway_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let catway = CatwayService::new(&state.db, &state.berth_locks)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(catway.into_dto())))
}

/// Replace every field of a catway.
///
/// Changing the number moves the catway's reservations to the new number.
///
/// # Returns
/// - `200 OK` - The updated catway
/// - `400 Bad Request` - Missing or invalid fields, or number already in use
/// - `404 Not Found` - Catway not found
#[utoipa::path(
    put,
    path = "/api/catways/{id}",
    tag = CATWAY_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID")
    ),
    request_body = CreateCatwayDto,
    responses(
        (status = 200, description = "Successfully replaced catway", body = CatwayDto),
        (status = 400, description = "Invalid catway data or duplicate number", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_catway(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCatwayDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let catway = CatwayService::new(&state.db, &state.berth_locks)
        .replace(id, CreateCatwayParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(catway.into_dto())))
}

/// Update the provided fields of a catway.
#[utoipa::path(
    patch,
    path = "/api/catways/{id}",
    tag = CATWAY_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID")
    ),
    request_body = UpdateCatwayDto,
    responses(
        (status = 200, description = "Successfully updated catway", body = CatwayDto),
        (status = 400, description = "Invalid catway data or duplicate number", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_catway(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCatwayDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let catway = CatwayService::new(&state.db, &state.berth_locks)
        .patch(id, UpdateCatwayParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(catway.into_dto())))
}

/// Delete a catway together with all of its reservations.
///
/// # Returns
/// - `200 OK` - The deleted catway
/// - `404 Not Found` - Catway not found
#[utoipa::path(
    delete,
    path = "/api/catways/{id}",
    tag = CATWAY_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted catway", body = CatwayDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_catway(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let catway = CatwayService::new(&state.db, &state.berth_locks)
        .remove(id)
        .await?;

    Ok((StatusCode::OK, Json(catway.into_dto())))
}

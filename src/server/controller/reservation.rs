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
        reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{
            require_booking_fields, CreateReservationParams, Reservation, UpdateReservationParams,
        },
        service::{catway::CatwayService, reservation::ReservationService},
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Resolves a catway ID from the path to its berth number.
async fn berth_number(state: &AppState, catway_id: i32) -> Result<i32, AppError> {
    let catway = CatwayService::new(&state.db, &state.berth_locks)
        .get_by_id(catway_id)
        .await?;

    Ok(catway.number)
}

fn into_dtos(reservations: Vec<Reservation>) -> Vec<ReservationDto> {
    reservations.into_iter().map(|r| r.into_dto()).collect()
}

/// List the reservations of a catway.
///
/// # Returns
/// - `200 OK` - Reservations of the catway, latest check-in first
/// - `404 Not Found` - Catway not found
#[utoipa::path(
    get,
    path = "/api/catways/{id}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID")
    ),
    responses(
        (status = 200, description = "Reservations of the catway", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catway_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let number = berth_number(&state, id).await?;
    let reservations = ReservationService::new(&state.db, &state.berth_locks)
        .list_for_berth(number)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(reservations))))
}

/// Book a catway.
///
/// The interval `[check_in, check_out)` must not overlap any other booking of the
/// catway. A booking may start exactly when another one ends.
///
/// # Returns
/// - `201 Created` - The created reservation
/// - `400 Bad Request` - Missing or invalid fields, or the catway is already booked
/// - `404 Not Found` - Catway not found
#[utoipa::path(
    post,
    path = "/api/catways/{id}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID")
    ),
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully booked catway", body = ReservationDto),
        (status = 400, description = "Invalid booking or catway already booked", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_catway_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    require_booking_fields(&payload)?;
    let number = berth_number(&state, id).await?;
    let reservation = ReservationService::new(&state.db, &state.berth_locks)
        .create(CreateReservationParams::from_dto(number, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Get a reservation of a catway.
#[utoipa::path(
    get,
    path = "/api/catways/{id}/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID"),
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway or reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catway_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((id, reservation_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let number = berth_number(&state, id).await?;
    let reservation = ReservationService::new(&state.db, &state.berth_locks)
        .get_for_berth(number, reservation_id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Update a reservation of a catway.
///
/// Absent fields keep their stored value. The catway of a reservation cannot be
/// changed.
///
/// # Returns
/// - `200 OK` - The updated reservation
/// - `400 Bad Request` - Invalid fields, or the new dates overlap another booking
/// - `404 Not Found` - Catway or reservation not found
#[utoipa::path(
    patch,
    path = "/api/catways/{id}/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID"),
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationDto),
        (status = 400, description = "Invalid booking or catway already booked", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway or reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_catway_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((id, reservation_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let number = berth_number(&state, id).await?;
    let service = ReservationService::new(&state.db, &state.berth_locks);

    // Ensures the reservation belongs to this catway before modifying it
    service.get_for_berth(number, reservation_id).await?;
    let reservation = service
        .update(reservation_id, UpdateReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation of a catway.
#[utoipa::path(
    delete,
    path = "/api/catways/{id}/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Catway ID"),
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Catway or reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_catway_reservation(
    State(state): State<AppState>,
    session: Session,
    Path((id, reservation_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let number = berth_number(&state, id).await?;
    let reservation = ReservationService::new(&state.db, &state.berth_locks)
        .remove_for_berth(number, reservation_id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// List every reservation of the harbor.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations grouped by catway number", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db, &state.berth_locks)
        .list_all()
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(reservations))))
}

/// Get a reservation by ID.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, &state.berth_locks)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation by ID.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, &state.berth_locks)
        .remove(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

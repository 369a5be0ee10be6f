use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, catway, reservation, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Harbormaster",
        description = "Catway and reservation management for harbor staff"
    ),
    tags(
        (name = catway::CATWAY_TAG, description = "Catway registry"),
        (name = reservation::RESERVATION_TAG, description = "Catway bookings"),
        (name = user::USER_TAG, description = "Staff management"),
        (name = auth::AUTH_TAG, description = "Staff sign-in")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(catway::get_catways, catway::create_catway))
        .routes(routes!(
            catway::get_catway_by_id,
            catway::replace_catway,
            catway::update_catway,
            catway::delete_catway
        ))
        .routes(routes!(
            reservation::get_catway_reservations,
            reservation::create_catway_reservation
        ))
        .routes(routes!(
            reservation::get_catway_reservation,
            reservation::update_catway_reservation,
            reservation::delete_catway_reservation
        ))
        .routes(routes!(reservation::get_reservations))
        .routes(routes!(
            reservation::get_reservation_by_id,
            reservation::delete_reservation_by_id
        ))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::replace_user,
            user::delete_user
        ))
        .routes(routes!(user::create_login_code))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
}

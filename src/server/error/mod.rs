//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type of the service layer. Its domain variants
//! (`Validation`, `NotFound`, `Conflict`) carry a human-readable message that is
//! returned verbatim to the caller; infrastructure variants are logged and answered
//! with a generic 500.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected state inside the codebase, such as unreadable stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket or file system error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed URL while building login links.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Malformed, missing or out-of-range input.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Referenced entity does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Overlapping booking or uniqueness violation.
    ///
    /// Results in 400 Bad Request with the provided message, matching the status
    /// the API has always used for rejected bookings.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Maps a unique constraint violation reported by the database to `Conflict`.
    ///
    /// Used where a concurrent writer may slip past the application level checks;
    /// every other database error is passed through unchanged.
    ///
    /// # Arguments
    /// - `err` - Error returned by the failed write
    /// - `message` - Message for the resulting conflict
    ///
    /// # Returns
    /// - `AppError::Conflict` - The write violated a unique constraint
    /// - `AppError::DbErr` - Any other database failure
    pub fn from_unique_violation(err: sea_orm::DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
            _ => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `Conflict`
/// - 404 Not Found - For `NotFound`
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all infrastructure errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(msg) | Self::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

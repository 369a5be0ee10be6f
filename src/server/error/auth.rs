use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No staff user is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session refers to a staff user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied action, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login code is unknown, already used or expired.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired login code")]
    InvalidLoginCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Messages returned to the client stay generic; details are logged at debug level.
///
/// # Returns
/// - 400 Bad Request - Invalid login code
/// - 401 Unauthorized - No valid session
/// - 403 Forbidden - Missing permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::InvalidLoginCode => (StatusCode::BAD_REQUEST, "Invalid or expired login code"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

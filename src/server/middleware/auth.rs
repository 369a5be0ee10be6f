use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// Manage staff users and issue login codes.
    Admin,
}

/// Outcome of checking a caller's session.
pub struct Authorization {
    pub authorized: bool,
    /// The signed-in staff user, present only when authorized.
    pub identity: Option<User>,
}

/// Gate in front of every API operation.
///
/// Resolves the staff user stored in the session and checks the requested
/// permissions. Harbor operations only require a signed-in user; staff management
/// additionally requires `Permission::Admin`.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Checks whether the session belongs to an existing staff user.
    ///
    /// Unlike `require`, a missing or stale session is not an error.
    ///
    /// # Returns
    /// - `Ok(Authorization)` - Result of the check
    /// - `Err(AppError)` - Session store or database failure
    pub async fn authorize(&self) -> Result<Authorization, AppError> {
        match self.require(&[]).await {
            Ok(user) => Ok(Authorization {
                authorized: true,
                identity: Some(user),
            }),
            Err(AppError::AuthErr(_)) => Ok(Authorization {
                authorized: false,
                identity: None,
            }),
            Err(err) => Err(err),
        }
    }

    /// Requires a signed-in staff user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is signed in
    /// - `Err(AuthError::UserNotInDatabase)` - The signed-in user has been deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to manage staff without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

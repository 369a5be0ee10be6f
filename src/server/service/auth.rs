//! Staff sign-in through one-time login codes.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::login_code::LoginCodeService,
};

/// Path of the endpoint that redeems login codes.
const LOGIN_PATH: &str = "/api/auth/login";

/// Code issued for a staff user along with the link that redeems it.
pub struct IssuedLogin {
    pub code: String,
    pub login_url: Url,
}

/// Service for issuing and redeeming staff login codes.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    login_codes: &'a LoginCodeService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `login_codes` - Shared store of issued login codes
    pub fn new(db: &'a DatabaseConnection, login_codes: &'a LoginCodeService) -> Self {
        Self { db, login_codes }
    }

    /// Issues a login code for an existing staff user.
    ///
    /// # Arguments
    /// - `user_id` - User the code signs in as
    /// - `app_url` - Public base URL used to build the login link
    ///
    /// # Returns
    /// - `Ok(IssuedLogin)` - The code and its login link
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::UrlErr)` - `app_url` cannot be used as a base URL
    pub async fn issue_login(&self, user_id: i32, app_url: &str) -> Result<IssuedLogin, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let code = self.login_codes.issue(user.id).await;
        let login_url = login_url(app_url, &code)?;

        tracing::info!("Issued login code for staff user {}", user.id);

        Ok(IssuedLogin { code, login_url })
    }

    /// Issues a login code for the admin with the given email address.
    ///
    /// Lets an operator regain access when no admin session exists and every
    /// previously issued code has expired.
    ///
    /// # Returns
    /// - `Ok((User, IssuedLogin))` - The admin and their login link
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AuthError::AccessDenied)` - The user is not an admin
    pub async fn issue_admin_login(
        &self,
        email: &str,
        app_url: &str,
    ) -> Result<(User, IssuedLogin), AppError> {
        let email = email.trim().to_lowercase();
        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        if !user.admin {
            return Err(AuthError::AccessDenied(
                user.id,
                "login recovery is limited to admins".to_string(),
            )
            .into());
        }

        let issued = self.issue_login(user.id, app_url).await?;

        Ok((user, issued))
    }

    /// Redeems a login code.
    ///
    /// # Returns
    /// - `Ok(User)` - The user the code was issued for
    /// - `Err(AuthError::InvalidLoginCode)` - Code unknown, used, expired, or its user
    ///   has been deleted since
    pub async fn login(&self, code: &str) -> Result<User, AppError> {
        let Some(user_id) = self.login_codes.redeem(code.trim()).await else {
            return Err(AuthError::InvalidLoginCode.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::InvalidLoginCode.into());
        };

        tracing::info!("Staff user {} logged in", user.id);

        Ok(user)
    }
}

/// Builds the link that redeems `code` against the API at `app_url`.
pub fn login_url(app_url: &str, code: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(app_url)?.join(LOGIN_PATH)?;
    url.query_pairs_mut().append_pair("code", code);

    Ok(url)
}

//! Staff user service for business logic.
//!
//! Validates staff input and enforces the rules around staff accounts: unique,
//! well-formed emails and no self-deletion.

use regex::Regex;
use sea_orm::DatabaseConnection;
use std::sync::LazyLock;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, NewUser, UpdateUserParams, User, UserChanges},
    util::parse::{check_max_length, non_blank},
};

/// Length bounds of a staff member's display name.
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,})+$").ok());

/// Service providing business logic for staff user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all staff users, newest first.
    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a staff user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Creates a staff user.
    ///
    /// The email is trimmed and lowercased before the uniqueness check.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Missing or too short name, or malformed email
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let (Some(name), Some(email)) = (non_blank(params.name), non_blank(params.email)) else {
            return Err(AppError::Validation(
                "All fields are required (name, email)".to_string(),
            ));
        };
        let name = validate_name(name)?;
        let email = validate_email(&email)?;

        let repo = UserRepository::new(self.db);
        if repo.email_taken(&email, None).await? {
            return Err(email_taken());
        }

        let user = repo
            .create(NewUser {
                name,
                email,
                admin: params.admin.unwrap_or(false),
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, EMAIL_TAKEN_MESSAGE))?;

        tracing::info!("Created staff user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Updates the provided fields of a staff user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Validation)` - Blank name or malformed email
    /// - `Err(AppError::Conflict)` - Email registered to another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(user_not_found());
        }

        let name = params.name.map(validate_name).transpose()?;
        let email = params
            .email
            .map(|email| validate_email(&email))
            .transpose()?;

        if let Some(email) = &email {
            if repo.email_taken(email, Some(id)).await? {
                return Err(email_taken());
            }
        }

        repo.update(
            id,
            UserChanges {
                name,
                email,
                admin: params.admin,
            },
        )
        .await
        .map_err(|e| AppError::from_unique_violation(e, EMAIL_TAKEN_MESSAGE))?
        .ok_or_else(user_not_found)
    }

    /// Deletes a staff user.
    ///
    /// # Arguments
    /// - `id` - User to delete
    /// - `acting_user_id` - User performing the deletion
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::Validation)` - A user tried to delete their own account
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn remove(&self, id: i32, acting_user_id: i32) -> Result<User, AppError> {
        if id == acting_user_id {
            return Err(AppError::Validation(
                "You cannot delete your own account".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        let user = repo.find_by_id(id).await?.ok_or_else(user_not_found)?;

        repo.delete(id).await?;

        tracing::info!("Deleted staff user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Creates the bootstrap admin if no staff user exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The registry was empty and the admin was created
    /// - `Ok(None)` - Staff users already exist
    pub async fn ensure_bootstrap_admin(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).count().await? > 0 {
            return Ok(None);
        }

        let user = self
            .create(CreateUserParams {
                name: Some(name.to_string()),
                email: Some(email.to_string()),
                admin: Some(true),
            })
            .await?;

        Ok(Some(user))
    }
}

const EMAIL_TAKEN_MESSAGE: &str = "Email is already registered";

fn validate_name(name: String) -> Result<String, AppError> {
    let name = non_blank(Some(name))
        .ok_or_else(|| AppError::Validation("name cannot be empty".to_string()))?;
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "name must be at least {} characters",
            MIN_NAME_LENGTH
        )));
    }
    check_max_length("name", &name, MAX_NAME_LENGTH)?;

    Ok(name)
}

fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(&email));
    if !valid {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }

    Ok(email)
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn email_taken() -> AppError {
    AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string())
}

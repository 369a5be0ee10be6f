//! Staff user domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// A harbor staff member allowed to use the API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Admins may manage other staff users and issue login codes.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            admin: dto.admin,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            admin: dto.admin,
        }
    }
}

/// Validated values for inserting a staff user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    /// Lowercased email address.
    pub email: String,
    pub admin: bool,
}

/// Validated changes applied to an existing staff user.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
}

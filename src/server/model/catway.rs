//! Catway domain models and parameters.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::catway::{CatwayDto, CreateCatwayDto, UpdateCatwayDto},
    server::error::{internal::InternalError, AppError},
};

/// Length class of a berth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatwayCategory {
    Long,
    Short,
}

impl CatwayCategory {
    /// Stored and serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Parses the exact lowercase names `long` and `short`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "long" => Some(Self::Long),
            "short" => Some(Self::Short),
            _ => None,
        }
    }
}

impl fmt::Display for CatwayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numbered berth that can be reserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Catway {
    pub id: i32,
    /// Unique, positive berth number. Reservations reference this value.
    pub number: i32,
    pub category: CatwayCategory,
    /// Free-text description of the berth's condition.
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Catway {
    /// Converts an entity model to a catway domain model.
    ///
    /// # Returns
    /// - `Ok(Catway)` - The converted catway
    /// - `Err(AppError::InternalErr(UnknownCatwayCategory))` - Stored category is not
    ///   `long` or `short`
    pub fn from_entity(entity: entity::catway::Model) -> Result<Self, AppError> {
        let category = CatwayCategory::parse(&entity.category).ok_or_else(|| {
            InternalError::UnknownCatwayCategory {
                id: entity.id,
                value: entity.category.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            number: entity.number,
            category,
            state: entity.state,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CatwayDto {
        CatwayDto {
            id: self.id,
            number: self.number,
            category: self.category.as_str().to_string(),
            state: self.state,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Raw input for creating or fully replacing a catway.
#[derive(Debug, Clone, Default)]
pub struct CreateCatwayParams {
    pub number: Option<i64>,
    pub category: Option<String>,
    pub state: Option<String>,
}

impl CreateCatwayParams {
    pub fn from_dto(dto: CreateCatwayDto) -> Self {
        Self {
            number: dto.number,
            category: dto.category,
            state: dto.state,
        }
    }
}

/// Raw input for a partial catway update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCatwayParams {
    pub number: Option<i64>,
    pub category: Option<String>,
    pub state: Option<String>,
}

impl UpdateCatwayParams {
    pub fn from_dto(dto: UpdateCatwayDto) -> Self {
        Self {
            number: dto.number,
            category: dto.category,
            state: dto.state,
        }
    }
}

/// Validated values for inserting a catway.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCatway {
    pub number: i32,
    pub category: CatwayCategory,
    pub state: String,
}

/// Validated changes applied to an existing catway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatwayChanges {
    pub number: Option<i32>,
    pub category: Option<CatwayCategory>,
    pub state: Option<String>,
}

impl From<NewCatway> for CatwayChanges {
    fn from(fields: NewCatway) -> Self {
        Self {
            number: Some(fields.number),
            category: Some(fields.category),
            state: Some(fields.state),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatwayDto {
    pub id: i32,
    pub number: i32,
    /// Either `long` or `short`.
    pub category: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a catway or replacing all of its fields.
///
/// Every field is optional at the wire level so that missing values are reported
/// as validation errors with a readable message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCatwayDto {
    pub number: Option<i64>,
    pub category: Option<String>,
    pub state: Option<String>,
}

/// Payload for a partial catway update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCatwayDto {
    pub number: Option<i64>,
    pub category: Option<String>,
    pub state: Option<String>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed API response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

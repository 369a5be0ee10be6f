use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub berth_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for booking a catway.
///
/// Dates are accepted as RFC 3339 timestamps, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM`
/// or plain `YYYY-MM-DD` (interpreted as UTC).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReservationDto {
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    server::error::AppError,
};

/// A booking of one catway by one client for a half-open interval of time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// Number of the booked catway.
    pub berth_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            berth_number: entity.berth_number,
            client_name: entity.client_name,
            boat_name: entity.boat_name,
            check_in: entity.check_in,
            check_out: entity.check_out,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            berth_number: self.berth_number,
            client_name: self.client_name,
            boat_name: self.boat_name,
            check_in: self.check_in,
            check_out: self.check_out,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Half-open occupancy interval `[check_in, check_out)`.
///
/// A window can only be constructed with `check_in` strictly before `check_out`, so
/// back-to-back bookings where one ends exactly when the next starts never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl BookingWindow {
    /// Creates a booking window.
    ///
    /// # Returns
    /// - `Ok(BookingWindow)` - `check_in` is strictly before `check_out`
    /// - `Err(AppError::Validation)` - The interval is empty or inverted
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<Self, AppError> {
        if check_in >= check_out {
            return Err(AppError::Validation(
                "check_in must be before check_out".to_string(),
            ));
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Returns whether this window shares any instant with `[check_in, check_out)`.
    pub fn overlaps(&self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> bool {
        check_in < self.check_out && check_out > self.check_in
    }
}

/// Raw input for booking a catway.
#[derive(Debug, Clone, Default)]
pub struct CreateReservationParams {
    pub berth_number: i32,
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

impl CreateReservationParams {
    pub fn from_dto(berth_number: i32, dto: CreateReservationDto) -> Self {
        Self {
            berth_number,
            client_name: dto.client_name,
            boat_name: dto.boat_name,
            check_in: dto.check_in,
            check_out: dto.check_out,
        }
    }
}

/// Error message for a booking with absent or blank fields.
pub const MISSING_BOOKING_FIELDS: &str =
    "All fields are required (client_name, boat_name, check_in, check_out)";

/// Checks that every field of a booking payload holds non-blank text.
///
/// Runs before the catway is resolved, so an incomplete booking is reported as such
/// even when the catway does not exist.
pub fn require_booking_fields(dto: &CreateReservationDto) -> Result<(), AppError> {
    let present = [&dto.client_name, &dto.boat_name, &dto.check_in, &dto.check_out]
        .iter()
        .all(|field| field.as_deref().is_some_and(|value| !value.trim().is_empty()));

    if present {
        Ok(())
    } else {
        Err(AppError::Validation(MISSING_BOOKING_FIELDS.to_string()))
    }
}

/// Raw input for modifying a reservation; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

impl UpdateReservationParams {
    pub fn from_dto(dto: UpdateReservationDto) -> Self {
        Self {
            client_name: dto.client_name,
            boat_name: dto.boat_name,
            check_in: dto.check_in,
            check_out: dto.check_out,
        }
    }
}

/// Validated values for inserting a reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub berth_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub window: BookingWindow,
}

/// Validated changes applied to an existing reservation.
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    /// Resulting interval after merging supplied dates with the stored ones.
    pub window: BookingWindow,
}

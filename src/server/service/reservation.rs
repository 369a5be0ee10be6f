//! Reservation engine.
//!
//! Bookings of one berth must never share an instant: every booking occupies the
//! half-open interval `[check_in, check_out)`, so a booking ending exactly when the next
//! one starts is allowed. Writes that can introduce an overlap run the overlap scan and
//! the write inside one transaction while holding the berth's lock from `BerthLocks`.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{catway::CatwayRepository, reservation::ReservationRepository},
    error::AppError,
    model::reservation::{
        BookingWindow, CreateReservationParams, NewReservation, Reservation, ReservationChanges,
        UpdateReservationParams, MISSING_BOOKING_FIELDS,
    },
    service::{berth_lock::BerthLocks, catway::concurrent_renumber},
    util::parse::{check_max_length, non_blank, parse_timestamp},
};

/// Maximum length of client and boat names.
const MAX_NAME_LENGTH: usize = 100;

const OVERLAP_MESSAGE: &str = "Berth already booked for these dates";

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a BerthLocks,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a BerthLocks) -> Self {
        Self { db, locks }
    }

    /// Lists the reservations of a berth, latest check-in first
    pub async fn list_for_berth(&self, berth_number: i32) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_berth(berth_number)
            .await?;

        Ok(reservations.into_iter().map(Reservation::from_entity).collect())
    }

    /// Lists every reservation of the harbor
    pub async fn list_all(&self) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db).get_all().await?;

        Ok(reservations.into_iter().map(Reservation::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(reservation_not_found)?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Gets a reservation only if it belongs to the given berth
    pub async fn get_for_berth(&self, berth_number: i32, id: i32) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_berth_and_id(berth_number, id)
            .await?
            .ok_or_else(reservation_not_found)?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Books a berth.
    ///
    /// Checks run in a fixed order so the caller always sees the first failing rule:
    /// missing fields and name lengths, then the berth's existence, then date parsing,
    /// the interval itself and a check-in in the past, and finally the overlap scan.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored booking
    /// - `Err(AppError::Validation)` - Missing, malformed or out-of-range input
    /// - `Err(AppError::NotFound)` - No catway has the requested number
    /// - `Err(AppError::Conflict)` - The interval overlaps a booking of the same berth
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let berth_number = params.berth_number;
        let (Some(client_name), Some(boat_name), Some(check_in), Some(check_out)) = (
            non_blank(params.client_name),
            non_blank(params.boat_name),
            non_blank(params.check_in),
            non_blank(params.check_out),
        ) else {
            return Err(AppError::Validation(MISSING_BOOKING_FIELDS.to_string()));
        };
        check_max_length("client_name", &client_name, MAX_NAME_LENGTH)?;
        check_max_length("boat_name", &boat_name, MAX_NAME_LENGTH)?;

        if CatwayRepository::new(self.db)
            .find_by_number(berth_number)
            .await?
            .is_none()
        {
            return Err(berth_not_found());
        }

        let check_in = parse_timestamp("check_in", &check_in)?;
        let check_out = parse_timestamp("check_out", &check_out)?;
        let window = BookingWindow::new(check_in, check_out)?;
        if window.check_in() < Utc::now() {
            return Err(AppError::Validation(
                "check_in cannot be in the past".to_string(),
            ));
        }

        let _guard = self.locks.acquire(berth_number).await;
        let txn = self.db.begin().await?;

        // The catway may have been deleted while waiting for the lock.
        if CatwayRepository::new(&txn)
            .find_by_number(berth_number)
            .await?
            .is_none()
        {
            return Err(berth_not_found());
        }

        let repo = ReservationRepository::new(&txn);
        let booked = repo.get_by_berth(berth_number).await?;
        if let Some(existing) = find_overlap(&booked, &window, None) {
            tracing::debug!(
                "Rejected booking of berth {}: overlaps reservation {}",
                berth_number,
                existing.id
            );
            return Err(AppError::Conflict(OVERLAP_MESSAGE.to_string()));
        }

        let reservation = repo
            .create(NewReservation {
                berth_number,
                client_name,
                boat_name,
                window,
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, OVERLAP_MESSAGE))?;

        txn.commit().await?;

        tracing::info!(
            "Booked berth {} from {} to {} (reservation {})",
            berth_number,
            reservation.check_in,
            reservation.check_out,
            reservation.id
        );

        Ok(Reservation::from_entity(reservation))
    }

    /// Modifies a reservation.
    ///
    /// Supplied dates are merged with the stored ones before the interval is checked.
    /// The overlap scan ignores the reservation itself. The berth of a reservation never
    /// changes, and moving a booking into the past is allowed.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated booking
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AppError::Validation)` - Malformed input or an empty/inverted interval
    /// - `Err(AppError::Conflict)` - The new interval overlaps another booking
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
    ) -> Result<Reservation, AppError> {
        let existing = ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(reservation_not_found)?;

        let client_name = params
            .client_name
            .map(|name| validate_name("client_name", name))
            .transpose()?;
        let boat_name = params
            .boat_name
            .map(|name| validate_name("boat_name", name))
            .transpose()?;
        let check_in = params
            .check_in
            .map(|value| parse_timestamp("check_in", &value))
            .transpose()?;
        let check_out = params
            .check_out
            .map(|value| parse_timestamp("check_out", &value))
            .transpose()?;

        let _guard = self.locks.acquire(existing.berth_number).await;
        let txn = self.db.begin().await?;

        let repo = ReservationRepository::new(&txn);
        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(reservation_not_found)?;
        if current.berth_number != existing.berth_number {
            return Err(concurrent_renumber());
        }

        let window = BookingWindow::new(
            check_in.unwrap_or(current.check_in),
            check_out.unwrap_or(current.check_out),
        )?;

        if check_in.is_some() || check_out.is_some() {
            let booked = repo.get_by_berth(current.berth_number).await?;
            if let Some(other) = find_overlap(&booked, &window, Some(current.id)) {
                tracing::debug!(
                    "Rejected move of reservation {}: overlaps reservation {}",
                    current.id,
                    other.id
                );
                return Err(AppError::Conflict(OVERLAP_MESSAGE.to_string()));
            }
        }

        let reservation = repo
            .update(
                current,
                ReservationChanges {
                    client_name,
                    boat_name,
                    window,
                },
            )
            .await
            .map_err(|e| AppError::from_unique_violation(e, OVERLAP_MESSAGE))?;

        txn.commit().await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Deletes a reservation by ID, returning the deleted booking
    pub async fn remove(&self, id: i32) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservation = repo.find_by_id(id).await?.ok_or_else(reservation_not_found)?;

        repo.delete(reservation.id).await?;

        tracing::info!(
            "Deleted reservation {} of berth {}",
            reservation.id,
            reservation.berth_number
        );

        Ok(Reservation::from_entity(reservation))
    }

    /// Deletes a reservation only if it belongs to the given berth
    pub async fn remove_for_berth(
        &self,
        berth_number: i32,
        id: i32,
    ) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservation = repo
            .find_by_berth_and_id(berth_number, id)
            .await?
            .ok_or_else(reservation_not_found)?;

        repo.delete(reservation.id).await?;

        tracing::info!(
            "Deleted reservation {} of berth {}",
            reservation.id,
            berth_number
        );

        Ok(Reservation::from_entity(reservation))
    }
}

/// Finds the first booking that shares an instant with `window`.
///
/// # Arguments
/// - `booked` - Bookings of a single berth
/// - `window` - Candidate interval
/// - `exclude_id` - Booking to skip, used when moving that booking
///
/// # Returns
/// - `Some(&Model)` - A conflicting booking
/// - `None` - The window is free
pub fn find_overlap<'r>(
    booked: &'r [entity::reservation::Model],
    window: &BookingWindow,
    exclude_id: Option<i32>,
) -> Option<&'r entity::reservation::Model> {
    booked
        .iter()
        .filter(|reservation| Some(reservation.id) != exclude_id)
        .find(|reservation| window.overlaps(reservation.check_in, reservation.check_out))
}

fn validate_name(field: &str, value: String) -> Result<String, AppError> {
    let value = non_blank(Some(value))
        .ok_or_else(|| AppError::Validation(format!("{} cannot be empty", field)))?;
    check_max_length(field, &value, MAX_NAME_LENGTH)?;

    Ok(value)
}

fn reservation_not_found() -> AppError {
    AppError::NotFound("Reservation not found".to_string())
}

fn berth_not_found() -> AppError {
    AppError::NotFound("Berth not found".to_string())
}

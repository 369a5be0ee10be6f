//! Reservation factory for creating test bookings.
//!
//! Factories write straight to the database and skip the reservation engine's
//! validation, which lets tests seed past or overlapping bookings on purpose.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, catway.number)
///     .window(start, start + Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    berth_number: i32,
    client_name: String,
    boat_name: String,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - client_name: `"Client {id}"`
    /// - boat_name: `"Boat {id}"`
    /// - check_in: 1 day from now
    /// - check_out: 3 days from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `berth_number` - Number of the booked catway
    pub fn new(db: &'a DatabaseConnection, berth_number: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            berth_number,
            client_name: format!("Client {}", id),
            boat_name: format!("Boat {}", id),
            check_in: now + Duration::days(1),
            check_out: now + Duration::days(3),
        }
    }

    /// Sets the client name.
    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Sets the boat name.
    pub fn boat_name(mut self, boat_name: impl Into<String>) -> Self {
        self.boat_name = boat_name.into();
        self
    }

    /// Sets the booked interval `[check_in, check_out)`.
    pub fn window(mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            berth_number: ActiveValue::Set(self.berth_number),
            client_name: ActiveValue::Set(self.client_name),
            boat_name: ActiveValue::Set(self.boat_name),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values on the given berth.
pub async fn create_reservation(
    db: &DatabaseConnection,
    berth_number: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, berth_number).build().await
}

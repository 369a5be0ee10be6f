//! Reservation fixtures for in-memory test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::reservation;

/// Default berth number.
pub const DEFAULT_BERTH_NUMBER: i32 = 1;

/// Default client name.
pub const DEFAULT_CLIENT_NAME: &str = "Test Client";

/// Default boat name.
pub const DEFAULT_BOAT_NAME: &str = "Test Boat";

/// Fixed reference instant used as the default check-in.
pub fn default_check_in() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a reservation entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - berth_number: `1`
/// - check_in: 2030-06-01 12:00 UTC
/// - check_out: 7 days after check_in
pub fn entity() -> reservation::Model {
    entity_builder().build()
}

/// Creates a reservation entity builder for customization.
pub fn entity_builder() -> ReservationEntityBuilder {
    ReservationEntityBuilder::default()
}

/// Builder for customized reservation entity models.
pub struct ReservationEntityBuilder {
    id: i32,
    berth_number: i32,
    client_name: String,
    boat_name: String,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl Default for ReservationEntityBuilder {
    fn default() -> Self {
        let check_in = default_check_in();
        Self {
            id: 1,
            berth_number: DEFAULT_BERTH_NUMBER,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            boat_name: DEFAULT_BOAT_NAME.to_string(),
            check_in,
            check_out: check_in + Duration::days(7),
        }
    }
}

impl ReservationEntityBuilder {
    /// Sets the reservation ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the berth number.
    pub fn berth_number(mut self, berth_number: i32) -> Self {
        self.berth_number = berth_number;
        self
    }

    /// Sets the client name.
    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Sets the booked interval `[check_in, check_out)`.
    pub fn window(mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Builds the reservation entity model.
    pub fn build(self) -> reservation::Model {
        reservation::Model {
            id: self.id,
            berth_number: self.berth_number,
            client_name: self.client_name,
            boat_name: self.boat_name,
            check_in: self.check_in,
            check_out: self.check_out,
            created_at: self.check_in - Duration::days(30),
            updated_at: self.check_in - Duration::days(30),
        }
    }
}

use crate::server::{
    error::AppError,
    model::reservation::{CreateReservationParams, UpdateReservationParams},
    service::{berth_lock::BerthLocks, reservation::ReservationService},
};
use chrono::{DateTime, Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod concurrency;
mod create;
mod remove;
mod update;

/// Start of the day `days` days from now, as an RFC 3339 string.
fn days_from_now(days: i64) -> String {
    day(days).to_rfc3339()
}

fn day(days: i64) -> DateTime<Utc> {
    let today = Utc::now().date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
    today + Duration::days(days)
}

fn booking(berth_number: i32, check_in: i64, check_out: i64) -> CreateReservationParams {
    CreateReservationParams {
        berth_number,
        client_name: Some("Jane Doe".to_string()),
        boat_name: Some("Sea Breeze".to_string()),
        check_in: Some(days_from_now(check_in)),
        check_out: Some(days_from_now(check_out)),
    }
}

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning raw caller input into validated values
//! - **Business Rules**: Berth uniqueness, the reservation overlap scan, staff rules
//! - **Transaction Management**: Running multi-step writes atomically under the
//!   berth's lock

pub mod auth;
pub mod berth_lock;
pub mod catway;
pub mod login_code;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;

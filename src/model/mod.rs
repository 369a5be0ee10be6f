//! Data transfer objects exchanged over the JSON API.

pub mod api;
pub mod catway;
pub mod reservation;
pub mod user;

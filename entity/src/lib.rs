//! SeaORM entities for the harbor database.

pub mod prelude;

pub mod catway;
pub mod reservation;
pub mod user;

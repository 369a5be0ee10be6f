//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry raw caller
//! input into the services, which validate it into the `New*`/`*Changes` types that
//! the repositories persist.

pub mod catway;
pub mod reservation;
pub mod user;

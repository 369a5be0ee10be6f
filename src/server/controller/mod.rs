//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs to service parameters,
//! call the service layer and convert the returned domain models back to DTOs.

pub mod auth;
pub mod catway;
pub mod reservation;
pub mod user;

//! Request-scoped helpers for sessions and access control.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;

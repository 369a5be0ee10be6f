//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each. The harbor repositories are
//! generic over `ConnectionTrait` so the services can run them either directly on the
//! connection pool or inside a transaction when several writes must commit together.

pub mod catway;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;

//! Test fixtures providing entity models without database insertion.
//!
//! Unlike factories, fixtures never touch the database. Use them for unit tests of
//! pure logic such as the overlap scan or entity-to-domain conversion.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let catway = fixture::catway::entity();
//! let booking = fixture::reservation::entity_builder()
//!     .id(7)
//!     .window(start, end)
//!     .build();
//! ```

pub mod catway;
pub mod reservation;

pub use catway::{entity as catway_entity, entity_builder as catway_entity_builder};
pub use reservation::{entity as reservation_entity, entity_builder as reservation_entity_builder};

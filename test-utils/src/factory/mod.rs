//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let catway = factory::create_catway(&db).await?;
//! let reservation = factory::reservation::ReservationFactory::new(&db, catway.number)
//!     .client_name("Jane")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Staff users
//! - `catway` - Berths
//! - `reservation` - Bookings of a berth
//! - `helpers` - Unique id generation and combined creation helpers

pub mod catway;
pub mod helpers;
pub mod reservation;
pub mod user;

pub use catway::create_catway;
pub use reservation::create_reservation;
pub use user::create_user;

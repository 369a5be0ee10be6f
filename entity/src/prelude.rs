pub use super::catway::Entity as Catway;
pub use super::reservation::Entity as Reservation;
pub use super::user::Entity as User;

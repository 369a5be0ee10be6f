mod auth;
mod catway;
mod reservation;

mod catway;
mod reservation;

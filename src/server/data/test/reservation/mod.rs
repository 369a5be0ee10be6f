use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{BookingWindow, NewReservation, ReservationChanges},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_berth;
mod update;

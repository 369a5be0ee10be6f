use crate::server::{
    data::catway::CatwayRepository,
    model::catway::{CatwayCategory, CatwayChanges, NewCatway},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod number_taken;

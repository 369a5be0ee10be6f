use crate::server::{
    error::AppError,
    model::catway::{CatwayCategory, CreateCatwayParams, UpdateCatwayParams},
    service::{berth_lock::BerthLocks, catway::CatwayService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};


fn params(number: i64, category: &str, state: &str) -> CreateCatwayParams {
    CreateCatwayParams {
        number: Some(number),
        category: Some(category.to_string()),
        state: Some(state.to_string()),
    }
}

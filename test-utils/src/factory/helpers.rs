//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a catway together with one default reservation on it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((catway, reservation))` - The created catway and its reservation
/// - `Err(DbErr)` - Database error during creation
pub async fn create_catway_with_reservation(
    db: &DatabaseConnection,
) -> Result<(entity::catway::Model, entity::reservation::Model), DbErr> {
    let catway = crate::factory::catway::create_catway(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, catway.number).await?;

    Ok((catway, reservation))
}

//! Catway factory for creating test berths.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test catways with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::catway::CatwayFactory;
///
/// let catway = CatwayFactory::new(&db)
///     .number(5)
///     .category("short")
///     .build()
///     .await?;
/// ```
pub struct CatwayFactory<'a> {
    db: &'a DatabaseConnection,
    number: i32,
    category: String,
    state: String,
}

impl<'a> CatwayFactory<'a> {
    /// Creates a new CatwayFactory with default values.
    ///
    /// Defaults:
    /// - number: unique auto-incremented value
    /// - category: `"long"`
    /// - state: `"good condition"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            number: next_id() as i32,
            category: "long".to_string(),
            state: "good condition".to_string(),
        }
    }

    /// Sets the berth number.
    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    /// Sets the stored category string (`"long"` or `"short"`).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the state description.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds and inserts the catway entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::catway::Model)` - Created catway entity
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicate number
    pub async fn build(self) -> Result<entity::catway::Model, DbErr> {
        let now = Utc::now();
        entity::catway::ActiveModel {
            number: ActiveValue::Set(self.number),
            category: ActiveValue::Set(self.category),
            state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catway with default values and a unique number.
pub async fn create_catway(db: &DatabaseConnection) -> Result<entity::catway::Model, DbErr> {
    CatwayFactory::new(db).build().await
}

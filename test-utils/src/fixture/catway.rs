//! Catway fixtures for in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::catway;

/// Default berth number.
pub const DEFAULT_NUMBER: i32 = 1;

/// Default stored category.
pub const DEFAULT_CATEGORY: &str = "long";

/// Default state description.
pub const DEFAULT_STATE: &str = "good condition";

fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a catway entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - number: `1`
/// - category: `"long"`
/// - state: `"good condition"`
pub fn entity() -> catway::Model {
    entity_builder().build()
}

/// Creates a catway entity builder for customization.
pub fn entity_builder() -> CatwayEntityBuilder {
    CatwayEntityBuilder::default()
}

/// Builder for customized catway entity models.
pub struct CatwayEntityBuilder {
    id: i32,
    number: i32,
    category: String,
    state: String,
}

impl Default for CatwayEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            number: DEFAULT_NUMBER,
            category: DEFAULT_CATEGORY.to_string(),
            state: DEFAULT_STATE.to_string(),
        }
    }
}

impl CatwayEntityBuilder {
    /// Sets the catway ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the berth number.
    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    /// Sets the stored category string.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the state description.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds the catway entity model.
    pub fn build(self) -> catway::Model {
        catway::Model {
            id: self.id,
            number: self.number,
            category: self.category,
            state: self.state,
            created_at: default_timestamp(),
            updated_at: default_timestamp(),
        }
    }
}

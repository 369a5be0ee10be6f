//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::service::{berth_lock::BerthLocks, login_code::LoginCodeService};

/// Application state containing shared resources.
///
/// Cloned for each request via Axum's state extraction. Every field is cheap to
/// clone and clones share the underlying resource:
/// - `DatabaseConnection` is a connection pool
/// - `BerthLocks` and `LoginCodeService` keep their state behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-berth locks serializing reservation writes.
    pub berth_locks: BerthLocks,

    /// Issued one-time staff login codes.
    pub login_codes: LoginCodeService,

    /// Public base URL used to build login links.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        berth_locks: BerthLocks,
        login_codes: LoginCodeService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            berth_locks,
            login_codes,
            app_url,
        }
    }
}

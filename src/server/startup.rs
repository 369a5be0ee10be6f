//! Initialization of logging, database, sessions and CORS.

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{auth::AuthService, login_code::LoginCodeService, user::UserService},
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "harbormaster=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `DEFAULT_LOG_FILTER`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database and expire after one day of
/// inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be added to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));

    Ok(session_layer)
}

/// Builds the CORS layer allowing credentialed requests from the configured origin.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to be added to the router
/// - `Err(ConfigError::InvalidEnvVar)` - `CORS_ORIGIN` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(&config.cors_origin).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Creates the bootstrap admin on an empty staff registry and logs a login link.
///
/// Without any staff user nobody could sign in to create one, so the first start
/// creates an admin from `BOOTSTRAP_STAFF_NAME`/`BOOTSTRAP_STAFF_EMAIL` and issues a
/// login code for it.
pub async fn check_for_staff(
    db: &DatabaseConnection,
    config: &Config,
    login_codes: &LoginCodeService,
) -> Result<(), AppError> {
    let admin = UserService::new(db)
        .ensure_bootstrap_admin(&config.bootstrap_staff_name, &config.bootstrap_staff_email)
        .await?;

    let Some(admin) = admin else {
        return Ok(());
    };

    let issued = AuthService::new(db, login_codes)
        .issue_login(admin.id, &config.app_url)
        .await?;

    tracing::info!(
        "No staff users found, created admin {}. Sign in within {} seconds at: {}",
        admin.email,
        login_codes.ttl().as_secs(),
        issued.login_url
    );

    Ok(())
}

/// Logs a fresh login link for the admin named by `RECOVERY_LOGIN_EMAIL`.
///
/// Login codes only live in memory, so after a restart this is the way back in when
/// no admin holds a session. An unknown or non-admin email is logged and skipped.
pub async fn issue_recovery_login(
    db: &DatabaseConnection,
    config: &Config,
    login_codes: &LoginCodeService,
) -> Result<(), AppError> {
    let Some(email) = config.recovery_login_email.as_deref() else {
        return Ok(());
    };

    match AuthService::new(db, login_codes)
        .issue_admin_login(email, &config.app_url)
        .await
    {
        Ok((admin, issued)) => {
            tracing::info!(
                "Recovery login for admin {}. Sign in within {} seconds at: {}",
                admin.email,
                login_codes.ttl().as_secs(),
                issued.login_url
            );
        }
        Err(AppError::NotFound(_)) | Err(AppError::AuthErr(_)) => {
            tracing::warn!("RECOVERY_LOGIN_EMAIL {} is not an admin, no login issued", email);
        }
        Err(err) => return Err(err),
    }

    Ok(())
}

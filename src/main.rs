mod model;
mod server;

use std::time::Duration;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::AppError,
    router, startup,
    service::{berth_lock::BerthLocks, login_code::LoginCodeService},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::setup_cors(&config)?;

    let login_codes = LoginCodeService::new(Duration::from_secs(config.login_code_ttl_seconds));

    // Create the first admin and log a login link if no staff exist
    startup::check_for_staff(&db, &config, &login_codes).await?;
    startup::issue_recovery_login(&db, &config, &login_codes).await?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            BerthLocks::new(),
            login_codes,
            config.app_url.clone(),
        ))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

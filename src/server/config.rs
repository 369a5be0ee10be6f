use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_APP_URL: &str = "http://localhost:3000";
const DEFAULT_LOGIN_CODE_TTL_SECONDS: u64 = 300;
const DEFAULT_BOOTSTRAP_STAFF_NAME: &str = "Harbor Master";
pub const DEFAULT_BOOTSTRAP_STAFF_EMAIL: &str = "admin@harbor.local";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Public base URL, used for login links and as the default CORS origin.
    pub app_url: String,
    pub cors_origin: String,

    pub login_code_ttl_seconds: u64,
    pub session_secure_cookie: bool,

    pub bootstrap_staff_name: String,
    pub bootstrap_staff_email: String,

    /// Admin to issue a login link for at startup, for when no admin can sign in.
    pub recovery_login_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = optional_var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_addr: parsed_var("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            cors_origin: optional_var("CORS_ORIGIN").unwrap_or_else(|| app_url.clone()),
            app_url,
            login_code_ttl_seconds: parsed_var(
                "LOGIN_CODE_TTL_SECONDS",
                &DEFAULT_LOGIN_CODE_TTL_SECONDS.to_string(),
            )?,
            session_secure_cookie: parsed_var("SESSION_SECURE_COOKIE", "false")?,
            bootstrap_staff_name: optional_var("BOOTSTRAP_STAFF_NAME")
                .unwrap_or_else(|| DEFAULT_BOOTSTRAP_STAFF_NAME.to_string()),
            bootstrap_staff_email: optional_var("BOOTSTRAP_STAFF_EMAIL")
                .unwrap_or_else(|| DEFAULT_BOOTSTRAP_STAFF_EMAIL.to_string()),
            recovery_login_email: optional_var("RECOVERY_LOGIN_EMAIL"),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = optional_var(name).unwrap_or_else(|| default.to_string());

    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the planner API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SESSION_TTL_MINUTES`: Lifetime of a login session (default: 300)
//! - `PASSWORD_MIN_LENGTH` / `PASSWORD_MAX_LENGTH`: Password length bounds (8 / 256)
//! - `ALLOWED_CHARACTERS_LOGIN`, `ALLOWED_CHARACTERS_CUSTOM_URL`,
//!   `ALLOWED_CHARACTERS_SCHEDULE_NAME`, `ALLOWED_CHARACTERS_PASSWORD`:
//!   comma-separated character classes (`SmallLetters, BigLetters, Digits, Symbols, Spaces`)
//! - `REQUIRED_CHARACTERS_PASSWORD`: comma-separated classes
//!   (`SmallLetter, BigLetter, Digit, Symbol`)
//!
//! A character list set to `none` unsets that policy: an unset allowed list
//! rejects every character, an unset required list requires nothing.

use std::{env, str::FromStr};

use eyre::{Result, WrapErr, eyre};
use planner_core::settings::{MAXIMUM_PASSWORD_LENGTH, MINIMUM_PASSWORD_LENGTH, PolicySettings};
use tracing::Level;

/// Configuration for the planner API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Session lifetime in minutes
    pub session_ttl_minutes: i64,

    /// Character and length rules for user input
    pub policy: PolicySettings,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - A character class list names an unknown class
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let session_ttl_minutes = env::var("SESSION_TTL_MINUTES")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .wrap_err("Invalid SESSION_TTL_MINUTES value")?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            session_ttl_minutes,
            policy: policy_from_env()?,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Builds the character policy, starting from the defaults.
pub fn policy_from_env() -> Result<PolicySettings> {
    let mut policy = PolicySettings::default();

    if let Some(classes) = class_list("ALLOWED_CHARACTERS_LOGIN")? {
        policy.login_characters = classes;
    }
    if let Some(classes) = class_list("ALLOWED_CHARACTERS_CUSTOM_URL")? {
        policy.custom_url_characters = classes;
    }
    if let Some(classes) = class_list("ALLOWED_CHARACTERS_SCHEDULE_NAME")? {
        policy.schedule_name_characters = classes;
    }
    if let Some(classes) = class_list("ALLOWED_CHARACTERS_PASSWORD")? {
        policy.password_characters = classes;
    }
    if let Some(classes) = class_list("REQUIRED_CHARACTERS_PASSWORD")? {
        policy.password_required_characters = classes;
    }

    policy.password_min_length = length("PASSWORD_MIN_LENGTH", MINIMUM_PASSWORD_LENGTH)?;
    policy.password_max_length = length("PASSWORD_MAX_LENGTH", MAXIMUM_PASSWORD_LENGTH)?;

    Ok(policy)
}

/// `None` when the variable is not set, `Some(None)` when it is `none`.
fn class_list<T>(name: &str) -> Result<Option<Option<Vec<T>>>>
where
    T: FromStr<Err = String>,
{
    match env::var(name) {
        Ok(value) => parse_class_list(&value)
            .map(Some)
            .map_err(|e| eyre!("Invalid {} value: {}", name, e)),
        Err(_) => Ok(None),
    }
}

pub fn parse_class_list<T>(value: &str) -> Result<Option<Vec<T>>, String>
where
    T: FromStr<Err = String>,
{
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(T::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn length(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", name)),
        Err(_) => Ok(default),
    }
}

use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub server_address: SocketAddr,
    /// Days of inactivity after which a session expires.
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_address: parse_or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)?,
            session_expiry_days: parse_or_default(
                "SESSION_EXPIRY_DAYS",
                &DEFAULT_SESSION_EXPIRY_DAYS.to_string(),
            )?,
        })
    }
}

fn parse_or_default<T: std::str::FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

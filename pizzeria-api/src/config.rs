use std::{env, net::SocketAddr, path::Path};

use dotenvy::dotenv;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5555";
pub const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pool_size: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),
    #[error("Invalid DATABASE_POOL_SIZE {0:?}, expected a positive integer")]
    InvalidPoolSize(String),
}

/// `app.db` next to this crate's manifest.
pub fn default_database_url() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("app.db")
        .to_string_lossy()
        .into_owned()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .unwrap_or_else(default_database_url);

        let bind_addr = match lookup("BIND_ADDR") {
            Some(addr) => addr.parse().map_err(|_| ConfigError::InvalidBindAddr(addr))?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(DEFAULT_BIND_ADDR.to_string()))?,
        };

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(size) => match size.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidPoolSize(size)),
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
        })
    }
}

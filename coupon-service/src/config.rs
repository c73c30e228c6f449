use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_ADDR: &str = "127.0.0.1:3001";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid COUPON_API_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the standalone server binds to
    pub addr: SocketAddr,
    /// Prefix the API routes are nested under, empty for none
    pub base_path: String,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr_value = std::env::var("COUPON_API_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let base_path = normalize_base_path(&std::env::var("API_BASE_PATH").unwrap_or_default());

        Ok(Self { addr, base_path })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            base_path: String::new(),
        }
    }
}

// "Prod/" -> "/Prod", "/" -> ""
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

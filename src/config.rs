use std::env;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

pub const BIND_ENV: &str = "NOSHOW_BIND";
pub const LOG_ENV: &str = "RUST_LOG";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILTER: &str = "noshow=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var(BIND_ENV).ok(), env::var(LOG_ENV).ok())
    }

    /// Applies overrides on top of the defaults. Blank values count as unset.
    pub fn resolve(bind: Option<String>, log_filter: Option<String>) -> Result<Self, ConfigError> {
        let bind = non_blank(bind).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        let log_filter = non_blank(log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::try_new(&log_filter).map_err(|err| ConfigError::InvalidLogFilter {
            value: log_filter.clone(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Installs the global fmt subscriber on stderr, keeping stdout free for command output.
/// Later calls are no-ops.
pub fn init_tracing(config: &ServiceConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Environment prefix for overrides, e.g. `ROSTER_LISTEN_ADDR=127.0.0.1:8080`.
pub const ENV_PREFIX: &str = "ROSTER_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// sqlx connection URL; the file is created when missing.
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Pool size. SQLite serializes writers, so one connection is the default.
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:database.db".to_string(),
            listen_addr: "0.0.0.0:3001".to_string(),
            loglevel: "info".to_string(),
            max_connections: 1,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load defaults overlaid with `ROSTER_*` environment variables.
    pub fn load() -> Result<Self, RosterError> {
        let cfg: Config = Self::figment().extract()?;
        if cfg.max_connections == 0 {
            return Err(figment::Error::from("max_connections must be at least 1".to_string()).into());
        }
        Ok(cfg)
    }
}

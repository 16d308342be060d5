//! Process configuration, read once at startup from the environment.
//!
//! Keys are matched case-insensitively, so `DB_HOST` and `db_host` both work.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::error::BlogError;

const ENV_KEYS: &[&str] = &[
    "db_host",
    "db_user",
    "db_password",
    "db_name",
    "database_url",
    "db_max_connections",
    "listen_addr",
    "port",
    "loglevel",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub port: u16,
    pub loglevel: String,
}

/// Connection parameters for the posts store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Full URL; takes precedence over the individual `db_*` fields.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0".to_string(),
            port: 3000,
            loglevel: "info".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "blogging_platform".to_string(),
            database_url: None,
            db_max_connections: 10,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Serialized::defaults(DatabaseConfig::default()))
            .merge(Env::raw().only(ENV_KEYS))
    }

    pub fn load() -> Result<Self, BlogError> {
        let figment = Self::figment();
        Ok(Self {
            server: figment.extract()?,
            database: figment.extract()?,
        })
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, BlogError> {
        Ok(format!("{}:{}", self.listen_addr, self.port).parse()?)
    }
}

impl DatabaseConfig {
    pub fn connect_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "mysql://{}:{}@{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_name
            ),
        }
    }

    /// Same as [`Self::connect_url`] with any password masked, for logging.
    pub fn redacted_url(&self) -> String {
        let url = self.connect_url();
        let Some((scheme, rest)) = url.split_once("://") else {
            return url;
        };
        let Some((userinfo, host)) = rest.rsplit_once('@') else {
            return url;
        };
        match userinfo.split_once(':') {
            Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
            None => url,
        }
    }
}

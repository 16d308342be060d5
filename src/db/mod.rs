//! Database module: the `posts` table and the stores that access it.
//!
//! Layout:
//! - `models.rs`: the `Post` entity and the tags text codec
//! - `schema.rs`: SQL DDL per backend
//! - `queries.rs`: statements and row decoding shared by the backends
//! - `store.rs`: the `PostStore` trait handlers are written against
//! - `sqlite.rs` / `mysql.rs`: sqlx-backed implementations

pub mod models;
pub mod mysql;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod store;

pub use models::{NewPost, Post};
pub use mysql::{MySqlPool, MySqlPostStore};
pub use sqlite::{SqlitePool, SqlitePostStore};
pub use store::PostStore;

use crate::config::DatabaseConfig;
use crate::error::BlogError;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Open a pool for the configured URL, pick the backend by scheme, and make
/// sure the `posts` table exists.
pub async fn connect(cfg: &DatabaseConfig) -> Result<Arc<dyn PostStore>, BlogError> {
    let url = cfg.connect_url();
    let store: Arc<dyn PostStore> = if url.starts_with("sqlite:") {
        let opts = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.db_max_connections)
            .connect_with(opts)
            .await?;
        Arc::new(SqlitePostStore::new(pool))
    } else {
        let pool = MySqlPoolOptions::new()
            .max_connections(cfg.db_max_connections)
            .connect(&url)
            .await?;
        Arc::new(MySqlPostStore::new(pool))
    };

    store.init_schema().await?;
    info!(database_url = %cfg.redacted_url(), "posts store ready");
    Ok(store)
}

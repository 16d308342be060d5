//! SQL DDL for the `posts` table.
//! `tags` holds a JSON array serialized as text.

pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    category TEXT NULL,
    tags TEXT NULL -- JSON array, serialized as text
)
"#;

pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    category VARCHAR(255) NULL,
    tags TEXT NULL
)
"#;

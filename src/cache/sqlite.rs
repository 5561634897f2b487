use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;

use crate::paths;
use crate::transform::TransformRequest;

/// SQLite-backed cache of transformation results.
///
/// Identical requests (same text, mode, option, locale, model, endpoint and
/// prompt templates) reuse the stored output instead of calling the backend
/// again. Only outputs are stored; documents themselves are never persisted.
pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir();

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        let db_path = cache_dir.join("transformations.db");
        let manager = Self { db_path };

        manager.init_db()?;

        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS transformations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL,
                output_text TEXT NOT NULL,
                mode TEXT NOT NULL,
                option_name TEXT,
                locale TEXT NOT NULL,
                model TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create transformations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON transformations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, request: &TransformRequest) -> Result<Option<String>> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT output_text FROM transformations WHERE cache_key = ?1")?;

        let result: Option<String> = stmt.query_row([&cache_key], |row| row.get(0)).ok();

        if result.is_some() {
            conn.execute(
                "UPDATE transformations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, request: &TransformRequest, output_text: &str) -> Result<()> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO transformations
             (cache_key, source_text, output_text, mode, option_name, locale, model, endpoint)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                cache_key,
                request.source_text,
                output_text,
                request.mode.key(),
                request.option,
                request.locale.key(),
                request.model,
                request.endpoint,
            ],
        )
        .context("Failed to insert transformation into cache")?;

        Ok(())
    }
}

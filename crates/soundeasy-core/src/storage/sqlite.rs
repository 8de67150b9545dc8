//! SQLite Text Storage
//!
//! Durable key/value documents in a single SQLite file.

use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Result, StorageError, TextStorage};

/// File name used under the platform data directory
pub const DEFAULT_DB_FILE: &str = "soundeasy.db";

/// SQLite-backed [`TextStorage`]
///
/// The connection sits behind a `Mutex`, so the storage is `Send + Sync`
/// and every method takes `&self`.
pub struct SqliteTextStorage {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteTextStorage {
    /// Apply PRAGMAs to a connection
    fn configure_connection(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;
             PRAGMA busy_timeout = 5000;",
        )?;

        Ok(())
    }

    /// Default database location under the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "soundeasy", "core").ok_or_else(|| {
            StorageError::Init("Could not determine project directories".to_string())
        })?;
        Ok(proj_dirs.data_dir().join(DEFAULT_DB_FILE))
    }

    /// Open (or create) storage at `db_path`, or at the platform default
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let path = match db_path {
            Some(p) => p,
            None => {
                let path = Self::default_path()?;
                if let Some(data_dir) = path.parent() {
                    std::fs::create_dir_all(data_dir)?;
                    // Restrict directory permissions to owner-only on Unix
                    #[cfg(unix)]
                    {
                        use std::os::unix::fs::PermissionsExt;
                        let perms = std::fs::Permissions::from_mode(0o700);
                        let _ = std::fs::set_permissions(data_dir, perms);
                    }
                }
                path
            }
        };

        let conn = Connection::open(&path)?;

        #[cfg(unix)]
        if path.exists() {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&path, perms);
        }

        Self::configure_connection(&conn)?;
        super::migrations::apply_migrations(&conn)?;

        tracing::info!(path = %path.display(), "Opened SQLite text storage");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Poisoned("SQLite connection".into()))
    }

    /// How many times `key` has been written, `None` if never
    pub fn revision(&self, key: &str) -> Result<Option<i64>> {
        let conn = self.lock()?;
        let revision = conn
            .query_row(
                "SELECT revision FROM documents WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(revision)
    }

    /// Keys of all stored documents
    pub fn keys(&self) -> Result<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT key FROM documents ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}

impl TextStorage for SqliteTextStorage {
    fn read_text(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_text(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO documents (key, value, updated_at, revision)
             VALUES (?1, ?2, ?3, 1)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at,
                revision = documents.revision + 1",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

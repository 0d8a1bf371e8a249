//! Durable State Slot
//!
//! The entire application state is persisted as one JSON blob in a single
//! row of a local SQLite database: whole-state read on startup, whole-state
//! overwrite on every committed transition. At this data scale the overwrite
//! is cheap, and it keeps the codec trivial — there is no incremental change
//! log.
//!
//! Failures here are never fatal to the caller: [`crate::store::AppStore`]
//! logs and absorbs them, continuing with its in-memory state.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use thiserror::Error;

use crate::shared::config::StoreConfig;
use crate::store::state::AppState;

/// Fixed key of the one slot holding the serialized application state.
pub const STATE_SLOT_KEY: &str = "funguys_app_state";

/// Durable slot errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not open or query the local database
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The stored payload could not be (de)serialized
    #[error("state payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Could not create the data directory
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the local database holding the state slot
#[derive(Debug)]
pub struct LocalStateDb {
    pool: SqlitePool,
}

impl LocalStateDb {
    /// Open or create the local database and ensure the slot table exists.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let db_path = config.db_path();
        if let Some(parent) = Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
        sqlx::query("PRAGMA synchronous=NORMAL").execute(&pool).await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS state_slots (
                slot TEXT PRIMARY KEY,
                payload TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Load the state blob, if one has been written.
    ///
    /// `Ok(None)` means a clean first run; a present-but-unparseable payload
    /// is an error so the caller can fall back to seed data.
    pub async fn load(&self) -> Result<Option<AppState>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT payload FROM state_slots WHERE slot = ?")
                .bind(STATE_SLOT_KEY)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((payload,)) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the slot with the complete serialized state.
    pub async fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let payload = serde_json::to_string(state)?;
        sqlx::query("INSERT OR REPLACE INTO state_slots (slot, payload, saved_at) VALUES (?, ?, ?)")
            .bind(STATE_SLOT_KEY)
            .bind(payload)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Overwrite the slot with a raw payload. Test hook for exercising the
    /// unreadable-slot recovery path.
    #[doc(hidden)]
    pub async fn save_raw(&self, payload: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO state_slots (slot, payload, saved_at) VALUES (?, ?, ?)")
            .bind(STATE_SLOT_KEY)
            .bind(payload)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

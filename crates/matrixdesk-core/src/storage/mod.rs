//! Persistence: a key-value store for app state and TOML configuration.
//!
//! Application state lives under three fixed keys, each holding a JSON
//! document:
//!
//! | Key                | Value                      |
//! |--------------------|----------------------------|
//! | `eisenhower.tasks` | array of tasks             |
//! | `ir.blueprint`     | IR blueprint or absent     |
//! | `kcs.documents`    | array of KCS documents     |

mod config;
pub mod memory;
pub mod sqlite;

pub use config::{ChunkingConfig, Config, LoggingConfig, TasksConfig};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::{CoreError, Result, StorageError};
use crate::ir::IrBlueprint;
use crate::kcs::library::KcsLibrary;
use crate::task::matrix::Matrix;

pub const TASKS_KEY: &str = "eisenhower.tasks";
pub const IR_KEY: &str = "ir.blueprint";
pub const KCS_KEY: &str = "kcs.documents";

/// Returns the data directory, creating it if needed.
///
/// `MATRIXDESK_HOME` overrides the location. Otherwise this is
/// `~/.config/matrixdesk`, or `~/.config/matrixdesk-dev` when
/// `MATRIXDESK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("MATRIXDESK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("MATRIXDESK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("matrixdesk-dev")
            } else {
                base_dir.join("matrixdesk")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// String key-value storage with typed JSON helpers.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    fn put_raw(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Load a JSON value, or `T::default()` when the key is missing or its
    /// value no longer decodes.
    fn load<T>(&self, key: &str) -> Result<T>
    where
        Self: Sized,
        T: DeserializeOwned + Default,
    {
        match self.load_strict(key) {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(CoreError::Storage(StorageError::CorruptValue { key, message })) => {
                tracing::warn!(%key, %message, "discarding undecodable stored value");
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load a JSON value, failing on undecodable data.
    fn load_strict<T>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| {
                StorageError::CorruptValue {
                    key: key.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }

    fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }
}

pub fn load_tasks<S: KeyValueStore>(store: &S) -> Result<Matrix> {
    store.load(TASKS_KEY)
}

pub fn save_tasks<S: KeyValueStore>(store: &S, matrix: &Matrix) -> Result<()> {
    store.save(TASKS_KEY, matrix)
}

pub fn load_ir<S: KeyValueStore>(store: &S) -> Result<Option<IrBlueprint>> {
    store.load(IR_KEY)
}

pub fn save_ir<S: KeyValueStore>(store: &S, ir: &IrBlueprint) -> Result<()> {
    store.save(IR_KEY, ir)
}

pub fn load_kcs<S: KeyValueStore>(store: &S) -> Result<KcsLibrary> {
    store.load(KCS_KEY)
}

pub fn save_kcs<S: KeyValueStore>(store: &S, library: &KcsLibrary) -> Result<()> {
    store.save(KCS_KEY, library)
}

//! # matrixdesk Core Library
//!
//! Business logic for matrixdesk, a local Eisenhower-matrix task organizer
//! with a text chunker for building knowledge compendiums. All operations
//! are available through the `matrixdesk` CLI, which is a thin layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Scoring**: priority score and automatic quadrant for a task
//! - **Tasks**: task records and the matrix board
//! - **KCS**: overlapping text chunking, JSON / JSONL export and import
//! - **IR**: instructional ruleset blueprint record
//! - **Storage**: key-value persistence (SQLite or in-memory) and TOML config
//!
//! ## Key Components
//!
//! - [`compute_score`] / [`auto_quadrant`]: scoring engine
//! - [`Task`] / [`Matrix`]: tasks and the board
//! - [`chunk_text`]: text chunker
//! - [`KeyValueStore`]: persistence seam

pub mod error;
pub mod ir;
pub mod kcs;
pub mod logging;
pub mod scoring;
pub mod storage;
pub mod task;

pub use error::{ChunkError, ConfigError, CoreError, Result, StorageError, ValidationError};
pub use ir::IrBlueprint;
pub use kcs::export::{export_json, export_jsonl, import_json, import_jsonl, ExportFormat};
pub use kcs::library::KcsLibrary;
pub use kcs::{chunk_text, chunk_text_with_id, ChunkOptions, KcsChunk, KcsDocument};
pub use logging::init_logging;
pub use scoring::{auto_quadrant, compute_score, due_pressure, score_breakdown, ScoreBreakdown};
pub use storage::{Config, KeyValueStore, MemoryStore, SqliteStore};
pub use task::matrix::{Matrix, QuadrantCounts};
pub use task::{AssignMode, Quadrant, Task, TaskInput};

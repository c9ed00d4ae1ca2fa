//! # 4RAP Infrastructure
//!
//! Concrete implementations around `fourrap-core`.
//! This crate contains the filesystem side of content ingestion, the snapshot
//! artifact and external service integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, ingestion and snapshots only
//! - `gemini` - Draft generation through the Gemini API via reqwest

pub mod ingest;
pub mod snapshot;

#[cfg(feature = "gemini")]
pub mod generator;

pub use ingest::{DocumentError, DocumentFailure, IngestReport, ingest_directory};
pub use snapshot::{SnapshotError, load_snapshot, write_snapshot};

#[cfg(feature = "gemini")]
pub use generator::{GeminiConfig, GeminiGenerator};

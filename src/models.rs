//! Core data models used throughout docdex.
//!
//! These types represent the discovered files, persisted metadata records,
//! and per-file outcomes that flow through the ingestion and enrichment
//! pipeline.

use std::path::PathBuf;

use uuid::Uuid;

/// A candidate file discovered in the ingest folder. Immutable once built.
#[derive(Debug, Clone)]
pub struct DocumentRef {
    pub path: PathBuf,
    /// Display name derived from the final path component.
    pub file_name: String,
    pub size: u64,
}

/// Persisted per-document entry.
///
/// `summary` and `keywords` are NULL at creation and set exactly once by the
/// enrichment update. `file_name` is the lookup key but is deliberately not
/// unique: re-ingesting the same file adds a second record.
#[derive(Debug, Clone)]
pub struct MetadataRecord {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    pub size: i64,
    pub summary: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub ingested_at: i64,
}

impl MetadataRecord {
    /// Build a fresh record for a discovered file, enrichment fields nulled.
    pub fn new(doc: &DocumentRef) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: doc.file_name.clone(),
            file_path: doc.path.to_string_lossy().to_string(),
            size: doc.size as i64,
            summary: None,
            keywords: None,
            ingested_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// How a single file fared during an ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Record created and enriched.
    Ingested,
    /// The file could not be parsed; no record was created.
    ExtractionFailed(String),
    /// Extraction yielded no analyzable text; no record was created.
    AnalysisFailed(String),
    /// The create or enrichment write against the store failed.
    StoreFailed(String),
}

/// Per-file outcome reported back from the orchestrator.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file_name: String,
    pub status: FileStatus,
}

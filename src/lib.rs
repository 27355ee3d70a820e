//! # docdex
//!
//! A concurrent document ingestion and enrichment pipeline.
//!
//! docdex scans a folder for candidate documents, extracts their plain
//! text, computes an extractive summary and a ranked keyword list for
//! each, and persists the results alongside file metadata in SQLite.
//! Files are processed independently across a bounded worker pool; a
//! single bad file never stops the batch.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────┐   ┌─────────┐   ┌───────────┐   ┌─────────────────────┐   ┌────────┐
//! │ scan │──▶│ extract │──▶│  analyze  │──▶│ summarize, keywords │──▶│ SQLite │
//! └──────┘   └─────────┘   └───────────┘   └─────────────────────┘   └────────┘
//! ```
//!
//! Persistence is two-phase: each record is created with nulled enrichment
//! fields, then a merge-update by file name sets summary and keywords.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`scan`] | Candidate file discovery |
//! | [`extract`] | Document text extraction |
//! | [`analyze`] | Sentence/token analysis |
//! | [`summarize`] | Extractive summarization |
//! | [`keywords`] | Keyword extraction |
//! | [`store`] | Metadata store client |
//! | [`ingest`] | Pipeline orchestration |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema creation |
//! | [`logging`] | Tracing setup |

pub mod analyze;
pub mod config;
pub mod db;
pub mod extract;
pub mod ingest;
pub mod keywords;
pub mod logging;
pub mod migrate;
pub mod models;
pub mod scan;
pub mod store;
pub mod summarize;

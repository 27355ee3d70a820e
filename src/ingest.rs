//! Ingestion pipeline orchestration.
//!
//! Coordinates the full run: discovery → bounded fan-out → extraction →
//! (summarization, keyword extraction) → create-then-enrich persistence.
//! Files are independent; a failure at any stage is logged, recorded in
//! the run report, and never aborts the batch. The only shared state is
//! the store pool and the immutable analyzer.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, warn};

use crate::analyze::Analyzer;
use crate::config::Config;
use crate::db;
use crate::extract;
use crate::keywords::extract_keywords;
use crate::models::{DocumentRef, FileOutcome, FileStatus, MetadataRecord};
use crate::scan::scan_folder;
use crate::store::MetadataStore;
use crate::summarize::summarize;

/// Aggregate result of one ingest run, with per-file outcomes.
#[derive(Debug)]
pub struct IngestReport {
    pub files_found: usize,
    pub ingested: usize,
    pub extraction_failed: usize,
    pub analysis_failed: usize,
    pub store_failed: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl IngestReport {
    fn from_outcomes(files_found: usize, outcomes: Vec<FileOutcome>) -> Self {
        let mut report = Self {
            files_found,
            ingested: 0,
            extraction_failed: 0,
            analysis_failed: 0,
            store_failed: 0,
            outcomes: Vec::new(),
        };
        for outcome in &outcomes {
            match outcome.status {
                FileStatus::Ingested => report.ingested += 1,
                FileStatus::ExtractionFailed(_) => report.extraction_failed += 1,
                FileStatus::AnalysisFailed(_) => report.analysis_failed += 1,
                FileStatus::StoreFailed(_) => report.store_failed += 1,
            }
        }
        report.outcomes = outcomes;
        report
    }
}

/// Aggregate result of a raw-extraction run.
#[derive(Debug)]
pub struct ExtractReport {
    pub files_found: usize,
    pub extracted: usize,
    pub failed: usize,
}

/// Ingest and enrich every candidate file in the folder.
///
/// `folder` overrides `ingest.folder` from the config when given. `limit`
/// caps the number of files processed.
pub async fn run_ingest(
    config: &Config,
    folder: Option<&Path>,
    limit: Option<usize>,
) -> Result<IngestReport> {
    let folder = folder.unwrap_or(&config.ingest.folder);
    let mut files = scan_folder(folder, &config.ingest.suffix)?;
    if let Some(lim) = limit {
        files.truncate(lim);
    }
    let files_found = files.len();

    let pool = db::connect(config).await?;
    let store = MetadataStore::new(pool.clone());
    let analyzer = Arc::new(Analyzer::new());
    let semaphore = Arc::new(Semaphore::new(config.ingest.pool_size));
    let sentence_count = config.ingest.sentence_count;

    let mut tasks: JoinSet<FileOutcome> = JoinSet::new();
    for doc in files {
        // Unbounded submission, bounded execution: the permit is taken
        // before the task starts and held for its whole pipeline.
        let permit = semaphore.clone().acquire_owned().await?;
        let store = store.clone();
        let analyzer = Arc::clone(&analyzer);
        tasks.spawn(async move {
            let _permit = permit;
            process_file(&store, &analyzer, doc, sentence_count).await
        });
    }

    let mut outcomes = Vec::with_capacity(files_found);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => error!("ingest worker panicked: {err}"),
        }
    }
    // Join order is arbitrary; report in file-name order.
    outcomes.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let report = IngestReport::from_outcomes(files_found, outcomes);

    println!("ingest {}", folder.display());
    println!("  files found: {}", report.files_found);
    println!("  records enriched: {}", report.ingested);
    if report.extraction_failed > 0 {
        println!("  extraction failures: {}", report.extraction_failed);
    }
    if report.analysis_failed > 0 {
        println!("  analysis failures: {}", report.analysis_failed);
    }
    if report.store_failed > 0 {
        println!("  store failures: {}", report.store_failed);
    }
    println!("ok");

    pool.close().await;
    Ok(report)
}

/// Drive one file through the pipeline. Never returns an error: every
/// failure becomes a per-file outcome.
async fn process_file(
    store: &MetadataStore,
    analyzer: &Analyzer,
    doc: DocumentRef,
    sentence_count: usize,
) -> FileOutcome {
    let text = match extract::extract_text(&doc.path) {
        Ok(text) => text,
        Err(err) => {
            return FileOutcome {
                file_name: doc.file_name,
                status: FileStatus::ExtractionFailed(err.to_string()),
            }
        }
    };

    if text.trim().is_empty() {
        warn!(file_name = %doc.file_name, "no analyzable text extracted");
        return FileOutcome {
            file_name: doc.file_name,
            status: FileStatus::AnalysisFailed("document produced no text".to_string()),
        };
    }

    let summary = summarize(analyzer, &text, sentence_count);
    let keywords = extract_keywords(analyzer, &text);

    // Two-phase persistence: the record first exists with nulled
    // enrichment, then a single merge-update fills it in.
    let record = MetadataRecord::new(&doc);
    if let Err(err) = store.create(&record).await {
        error!(file_name = %doc.file_name, "failed to store metadata: {err:#}");
        return FileOutcome {
            file_name: doc.file_name,
            status: FileStatus::StoreFailed(err.to_string()),
        };
    }

    if let Err(err) = store.set_enrichment(&doc.file_name, &summary, &keywords).await {
        error!(file_name = %doc.file_name, "failed to update metadata: {err:#}");
        return FileOutcome {
            file_name: doc.file_name,
            status: FileStatus::StoreFailed(err.to_string()),
        };
    }

    FileOutcome {
        file_name: doc.file_name,
        status: FileStatus::Ingested,
    }
}

/// Extract raw text from every candidate file without persisting anything.
///
/// This is the dry half of the pipeline: same discovery, same extraction,
/// same fan-out, and the text is discarded after its size is reported.
pub async fn run_extract(config: &Config, folder: Option<&Path>) -> Result<ExtractReport> {
    let folder = folder.unwrap_or(&config.ingest.folder);
    let files = scan_folder(folder, &config.ingest.suffix)?;
    let files_found = files.len();

    let semaphore = Arc::new(Semaphore::new(config.ingest.pool_size));
    let mut tasks: JoinSet<(String, Option<usize>)> = JoinSet::new();
    for doc in files {
        let permit = semaphore.clone().acquire_owned().await?;
        tasks.spawn(async move {
            let _permit = permit;
            let chars = extract::extract_text(&doc.path)
                .map(|text| text.chars().count())
                .ok();
            (doc.file_name, chars)
        });
    }

    let mut results = Vec::with_capacity(files_found);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(err) => error!("extract worker panicked: {err}"),
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));

    let mut extracted = 0;
    let mut failed = 0;
    println!("extract {}", folder.display());
    for (file_name, chars) in &results {
        match chars {
            Some(chars) => {
                extracted += 1;
                println!("  {}: {} chars", file_name, chars);
            }
            None => {
                failed += 1;
                println!("  {}: extraction failed", file_name);
            }
        }
    }
    println!("  files found: {}", files_found);
    println!("ok");

    Ok(ExtractReport {
        files_found,
        extracted,
        failed,
    })
}

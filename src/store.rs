//! Metadata store client.
//!
//! Wraps the SQLite collection of per-document records. `create` inserts
//! unconditionally — there is no existence check, so re-ingesting a file
//! adds a second record for the same name. `set_enrichment` matches on
//! exact file name and updates every matching row; zero matches is a
//! silent no-op. The keyword list is stored as a JSON string column.

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::models::MetadataRecord;

/// Handle to the metadata collection. Cheap to clone; safe to share across
/// concurrent tasks.
#[derive(Clone)]
pub struct MetadataStore {
    pool: SqlitePool,
}

impl MetadataStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a fresh record. Enrichment fields are written as given,
    /// normally NULL at creation.
    pub async fn create(&self, record: &MetadataRecord) -> Result<()> {
        let keywords_json = match &record.keywords {
            Some(keywords) => Some(serde_json::to_string(keywords)?),
            None => None,
        };

        sqlx::query(
            r#"
            INSERT INTO documents (id, file_name, file_path, size, summary, keywords, ingested_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.file_name)
        .bind(&record.file_path)
        .bind(record.size)
        .bind(&record.summary)
        .bind(keywords_json)
        .bind(record.ingested_at)
        .execute(&self.pool)
        .await?;

        info!(file_name = %record.file_name, "metadata stored");
        Ok(())
    }

    /// Set summary and keywords on every record matching `file_name`.
    ///
    /// Returns the number of rows updated; zero means no record matched,
    /// which is not an error.
    pub async fn set_enrichment(
        &self,
        file_name: &str,
        summary: &str,
        keywords: &[String],
    ) -> Result<u64> {
        let keywords_json = serde_json::to_string(keywords)?;

        let result = sqlx::query("UPDATE documents SET summary = ?, keywords = ? WHERE file_name = ?")
            .bind(summary)
            .bind(keywords_json)
            .bind(file_name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Fetch every record matching `file_name`, oldest first.
    pub async fn records_by_name(&self, file_name: &str) -> Result<Vec<MetadataRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, file_name, file_path, size, summary, keywords, ingested_at
            FROM documents WHERE file_name = ?
            ORDER BY ingested_at ASC, id ASC
            "#,
        )
        .bind(file_name)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_record).collect()
    }

    /// Total number of stored records.
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<MetadataRecord> {
    let keywords_json: Option<String> = row.get("keywords");
    let keywords = match keywords_json {
        Some(json) => Some(serde_json::from_str(&json)?),
        None => None,
    };

    Ok(MetadataRecord {
        id: row.get("id"),
        file_name: row.get("file_name"),
        file_path: row.get("file_path"),
        size: row.get("size"),
        summary: row.get("summary"),
        keywords,
        ingested_at: row.get("ingested_at"),
    })
}

/// CLI entry point — print every stored record matching `file_name`.
pub async fn run_get(config: &Config, file_name: &str) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = MetadataStore::new(pool.clone());
    let records = store.records_by_name(file_name).await?;
    pool.close().await;

    if records.is_empty() {
        println!("no records for {}", file_name);
        return Ok(());
    }

    println!("--- {} record(s) for {} ---", records.len(), file_name);
    for record in &records {
        println!();
        println!("id:          {}", record.id);
        println!("file_path:   {}", record.file_path);
        println!("size:        {}", record.size);
        println!("ingested_at: {}", format_ts_iso(record.ingested_at));
        println!(
            "summary:     {}",
            record.summary.as_deref().unwrap_or("(pending)")
        );
        match &record.keywords {
            Some(keywords) => println!("keywords:    {}", keywords.join(", ")),
            None => println!("keywords:    (pending)"),
        }
    }

    Ok(())
}

fn format_ts_iso(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| ts.to_string())
}

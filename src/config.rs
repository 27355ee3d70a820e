use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    /// Folder scanned for candidate documents.
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    /// Case-sensitive file-name suffix a candidate must end with.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Maximum number of files processed concurrently.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Number of sentences in each generated summary.
    #[serde(default = "default_sentence_count")]
    pub sentence_count: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            suffix: default_suffix(),
            pool_size: default_pool_size(),
            sentence_count: default_sentence_count(),
        }
    }
}

fn default_folder() -> PathBuf {
    PathBuf::from("./documents")
}
fn default_suffix() -> String {
    ".pdf".to_string()
}
fn default_pool_size() -> usize {
    4
}
fn default_sentence_count() -> usize {
    crate::summarize::DEFAULT_SENTENCE_COUNT
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.ingest.suffix.is_empty() {
        anyhow::bail!("ingest.suffix must not be empty");
    }

    if config.ingest.pool_size == 0 {
        anyhow::bail!("ingest.pool_size must be > 0");
    }

    if config.ingest.sentence_count == 0 {
        anyhow::bail!("ingest.sentence_count must be > 0");
    }

    Ok(config)
}

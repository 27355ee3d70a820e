use anyhow::{bail, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::models::DocumentRef;

/// Enumerate candidate files directly inside `folder`.
///
/// A candidate is a regular file whose name ends with `suffix`, compared
/// case-sensitively. Subdirectories are not descended into. Results are
/// sorted by file name so runs are deterministic.
pub fn scan_folder(folder: &Path, suffix: &str) -> Result<Vec<DocumentRef>> {
    if !folder.is_dir() {
        bail!("ingest folder does not exist: {}", folder.display());
    }

    let mut docs = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(suffix) {
            continue;
        }

        let size = entry.metadata()?.len();
        docs.push(DocumentRef {
            path: entry.path().to_path_buf(),
            file_name,
            size,
        });
    }

    docs.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(docs)
}

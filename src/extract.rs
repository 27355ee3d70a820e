//! Text extraction for candidate documents.
//!
//! `.pdf` files go through `pdf-extract`, which walks pages in order and
//! concatenates their text content. Any other suffix is decoded as UTF-8
//! plain text. The whole file is read up front in a scoped call, so the
//! underlying handle is released before extraction starts, on success and
//! failure alike.

use std::path::{Path, PathBuf};

use tracing::error;

/// Extraction failure, carrying the offending path and the cause.
#[derive(Debug)]
pub enum ExtractError {
    Io { path: PathBuf, source: std::io::Error },
    Pdf { path: PathBuf, message: String },
    Encoding { path: PathBuf },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ExtractError::Pdf { path, message } => {
                write!(f, "PDF extraction failed for {}: {}", path.display(), message)
            }
            ExtractError::Encoding { path } => {
                write!(f, "{} is not valid UTF-8", path.display())
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Extract the plain text of a document.
///
/// Failures are logged here as well as returned; callers decide whether to
/// skip the file or abort.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let result = read_and_extract(path);
    if let Err(ref err) = result {
        error!("extraction failed: {err}");
    }
    result
}

fn read_and_extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().and_then(|ext| ext.to_str()) == Some("pdf") {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    } else {
        String::from_utf8(bytes).map_err(|_| ExtractError::Encoding {
            path: path.to_path_buf(),
        })
    }
}

pub mod filesystem;

use crate::error::{Result, SentimentError};
use crate::scoring::Scorer;
use crate::types::report::{BatchReport, DocumentScore};
use filesystem::list_files_with_extension;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// Reads every review file under `root`. Files that are not valid UTF-8 are
/// skipped with a warning rather than failing the whole batch.
pub fn collect_documents(root: &Path, extension: &str) -> Result<Vec<Document>> {
    if !root.exists() {
        return Err(SentimentError::PathNotFound(root.display().to_string()));
    }

    let extension = extension.trim_start_matches('.');
    let mut documents = Vec::new();
    for path in list_files_with_extension(root, extension) {
        let bytes = std::fs::read(&path)?;
        match String::from_utf8(bytes) {
            Ok(text) => documents.push(Document { path, text }),
            Err(_) => {
                tracing::warn!(path = %path.display(), "skipping file that is not valid utf-8");
            }
        }
    }
    tracing::info!(
        root = %root.display(),
        count = documents.len(),
        "collected documents"
    );
    Ok(documents)
}

pub fn score_documents(root: &Path, documents: &[Document], scorer: &dyn Scorer) -> BatchReport {
    let scored = documents
        .iter()
        .map(|document| {
            let path = document
                .path
                .strip_prefix(root)
                .unwrap_or(&document.path)
                .display()
                .to_string();
            let result = scorer.predict(&document.text);
            tracing::debug!(path = %path, sentiment = %result.sentiment, "scored document");
            DocumentScore { path, result }
        })
        .collect();
    BatchReport::new(scorer.name(), scored)
}

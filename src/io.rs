//! Dataset ingest: the only fallible surface of the crate.
//!
//! The analytical core is total, so failures can only happen while loading
//! input. A dataset is a single JSON document holding the book collection and
//! the borrow history.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{Book, BorrowRecord};

/// The two input sets the restructuring engine is constructed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub records: Vec<BorrowRecord>,
}

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset JSON in {}", path.display()))?;

    log::debug!(
        "Loaded dataset from {}: {} books, {} borrow records",
        path.display(),
        dataset.books.len(),
        dataset.records.len()
    );
    Ok(dataset)
}

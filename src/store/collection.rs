// src/store/collection.rs
// =============================================================================
// Reads, extends and writes the article collection file.
//
// File shape:
//   {
//     "articles": [
//       { "url": "...", "title": "...", ... },
//       ...
//     ]
//   }
//
// Existing entries are kept exactly as they are (including fields we don't
// know about and the order of their keys), as are any other top-level keys.
// "articles": null counts as an empty list. New records go on the end.
// =============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::backup::create_backup;
use crate::error::StoreError;
use crate::extract::MetadataRecord;

// The `{"articles": [...]}` document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ArticleCollection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub articles: Vec<Value>,
    /// Any other top-level keys, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// What happened during an append
#[derive(Debug)]
pub struct AppendOutcome {
    /// Where the previous contents were copied, if there were any
    pub backup: Option<PathBuf>,
    /// Number of articles in the file after the append
    pub total: usize,
}

// Appends a record to the collection file
//
// Parameters:
//   record: the freshly extracted metadata
//   path: the {"articles": [...]} file (created if missing)
//
// Returns: the backup location (if the file had content) and the new count
//
// A missing or empty file starts a new collection. Otherwise the file is
// backed up first, then parsed; a file that isn't a valid collection is an
// error and is left unmodified (the backup already exists at that point).
pub fn append_record(record: &MetadataRecord, path: &Path) -> Result<AppendOutcome, StoreError> {
    let (mut collection, backup) = if has_content(path)? {
        let backup = create_backup(path)?;
        (read_collection(path)?, Some(backup))
    } else {
        (ArticleCollection::default(), None)
    };

    collection.articles.push(serde_json::to_value(record)?);
    write_json(path, &collection)?;

    info!(path = %path.display(), total = collection.articles.len(), "record appended");
    Ok(AppendOutcome {
        backup,
        total: collection.articles.len(),
    })
}

// Writes one record on its own to `path`, replacing whatever was there
pub fn write_standalone(record: &MetadataRecord, path: &Path) -> Result<(), StoreError> {
    write_json(path, record)?;
    info!(path = %path.display(), "record written");
    Ok(())
}

// A null "articles" value is just an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

// True if the file exists and is not empty
fn has_content(path: &Path) -> Result<bool, StoreError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len() > 0),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::io("failed to inspect", path, e)),
    }
}

fn read_collection(path: &Path) -> Result<ArticleCollection, StoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::io("failed to read existing file", path, e))?;

    serde_json::from_str(&content).map_err(|source| StoreError::InvalidCollection {
        path: path.to_path_buf(),
        source,
    })
}

// Pretty-printed with two-space indentation
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| StoreError::io("failed to write to file", path, e))
}

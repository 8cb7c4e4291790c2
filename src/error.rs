// src/error.rs
// =============================================================================
// Error types for the parts of the program that can actually fail:
// fetching the page and updating the JSON file.
//
// These are typed (thiserror) so tests can match on them; main.rs wraps them
// in anyhow with a bit of context before printing a single message.
// Messages don't repeat their cause: main prints the whole chain with {:#}.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

// Failures while fetching the page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch URL: status code {0}")]
    Status(u16),
}

// Failures while reading, backing up, or writing the JSON file
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON format in existing file {}", .path.display())]
    InvalidCollection {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Builds an Io error with a short description of what we were doing
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

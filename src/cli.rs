// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   og-extractor [OPTIONS] <URL> <JSON_FILE>
//
// Both positional arguments are required. clap prints the usage and exits
// with a non-zero status if either is missing or there are extras.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::fetch::FetchConfig;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "og-extractor",
    version,
    about = "Extract Open Graph metadata from a web page and append it to a JSON file",
    after_help = "The target JSON file must follow the structure: {\"articles\":[{...}]}\n\
                  A backup of the original file will be created before modification."
)]
pub struct Cli {
    /// URL of the web page to extract Open Graph metadata from
    pub url: String,

    /// Path to the target JSON file to append the metadata to
    pub json_file: PathBuf,

    /// Write the record on its own, replacing the file, instead of appending
    /// to an {"articles": [...]} collection
    #[arg(long)]
    pub standalone: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, default_value = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Collects the HTTP-related options
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }
}

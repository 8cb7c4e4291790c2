// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the page and parse its HTML
// 3. Extract the metadata record (slug, OpenGraph fields, publish date)
// 4. Append it to the JSON collection (after backing the file up)
// 5. Print the record and exit with the proper code (0 = success, 1 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - fetch/storage error types
mod extract;  // src/extract/ - metadata extraction
mod fetch;    // src/fetch/ - HTTP download
mod logging;  // src/logging.rs - tracing setup
mod store;    // src/store/ - JSON collection file + backups

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use scraper::Html;

use cli::Cli;
use extract::MetadataRecord;

#[tokio::main]
async fn main() {
    // Argument errors are handled inside Cli::parse(): usage + exit status 2
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole chain: "context: cause: cause"
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let record = extract_record(&cli)
        .await
        .context("failed to extract metadata")?;

    if cli.standalone {
        store::write_standalone(&record, &cli.json_file)
            .context("failed to save JSON file")?;
        print_record(&record)?;
        println!("\nSuccessfully wrote {}", cli.json_file.display());
    } else {
        let outcome = store::append_record(&record, &cli.json_file)
            .context("failed to append to JSON file")?;
        print_record(&record)?;
        if let Some(backup) = &outcome.backup {
            tracing::info!(backup = %backup.display(), "previous contents saved");
        }
        tracing::info!(total = outcome.total, "collection updated");
        println!("\nSuccessfully appended to {}", cli.json_file.display());
    }

    Ok(())
}

// Fetches, parses and extracts; the only step here that can fail is the fetch
async fn extract_record(cli: &Cli) -> Result<MetadataRecord> {
    let html = fetch::fetch_page(&cli.url, &cli.fetch_config()).await?;
    let document = Html::parse_document(&html);
    Ok(extract::build_record(&cli.url, &document))
}

// Prints the record as pretty JSON on stdout
fn print_record(record: &MetadataRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{}", json);
    Ok(())
}

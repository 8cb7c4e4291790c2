// src/fetch/mod.rs
// =============================================================================
// This module downloads the article page.
//
// Only a plain 200 OK counts as success. The body is returned as text and
// parsed by the caller with scraper.
// =============================================================================

mod page;

pub use page::{fetch_page, FetchConfig};

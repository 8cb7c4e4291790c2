// src/extract/pipeline.rs
// =============================================================================
// Puts the extraction strategies together into one record.
//
// Order of work:
//   1. slug from the requested URL
//   2. one markup walk (meta tags + structured-data blocks)
//   3. if still no date: look for one inside the requested URL
//
// This never fails. Anything that can go wrong (network, HTML, disk) happens
// before or after this step.
// =============================================================================

use scraper::Html;
use tracing::debug;

use super::markup::walk_markup;
use super::record::MetadataRecord;
use super::slug::derive_slug;
use super::url_date::extract_date_from_url;

// Builds the metadata record for one page
//
// Parameters:
//   url: the URL the page was fetched from (slug and URL-date source)
//   document: the already-parsed page
//
// Returns: a best-effort MetadataRecord; publish_date may be absent
pub fn build_record(url: &str, document: &Html) -> MetadataRecord {
    let mut record = MetadataRecord {
        slug: derive_slug(url),
        ..Default::default()
    };

    let blocks = walk_markup(document, &mut record);
    debug!(blocks = blocks.len(), "markup walk finished");

    if !record.has_publish_date() {
        // An empty result simply leaves the date absent
        record.offer_publish_date(&extract_date_from_url(url));
    }

    record
}

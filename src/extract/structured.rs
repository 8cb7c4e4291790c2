// src/extract/structured.rs
// =============================================================================
// Pulls a publication date out of an embedded JSON-LD (or plain JSON) block.
//
// Many script blocks are not objects, not well-formed, or simply carry no
// date. None of that is an error: absence of a date is the normal case, so a
// block we can't use is skipped and the next strategy gets its turn.
// =============================================================================

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::record::MetadataRecord;

// Date-bearing fields, in order of preference.
pub const DATE_FIELDS: &[&str] = &[
    "datePublished",
    "dateCreated",
    "publishedTime",
    "dateModified",
    "pubDate",
];

// Sets the record's publish date from a JSON-LD block, if still unset
//
// Parameters:
//   text: raw contents of one <script> block
//   record: the record being built (only publish_date may change)
//
// The value is stored exactly as written; no format checks happen here.
pub fn extract_date_from_structured_data(text: &str, record: &mut MetadataRecord) {
    if record.has_publish_date() {
        return;
    }

    let object: Map<String, Value> = match serde_json::from_str(text) {
        Ok(object) => object,
        Err(e) => {
            trace!("skipping structured data block: {}", e);
            return;
        }
    };

    // Schema.org Article/NewsArticle blocks use the same field list, so one
    // ordered scan covers typed and untyped objects alike.
    if let Some((field, date)) = first_date_field(&object) {
        if record.offer_publish_date(date) {
            debug!(field, date, "publish date from structured data");
        }
    }
}

// Finds the first field in DATE_FIELDS that holds a string
fn first_date_field(object: &Map<String, Value>) -> Option<(&'static str, &str)> {
    DATE_FIELDS.iter().find_map(|&field| {
        object
            .get(field)
            .and_then(Value::as_str)
            .map(|date| (field, date))
    })
}

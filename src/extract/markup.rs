// src/extract/markup.rs
// =============================================================================
// Walks a parsed page once, in document order, and harvests:
//   - OpenGraph and date meta tags  -> fields of the record
//   - JSON / JSON-LD script blocks  -> raw text, plus any date they carry
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree (built on html5ever, Mozilla's HTML parser)
// - Lets us iterate over every node in document (pre-order) order
//
// Order matters. When several tags carry the same meaning, the position in
// the document decides:
//   - date tags and date-bearing scripts: the FIRST one wins
//   - og:* fields: each occurrence overwrites, so the LAST one wins
// Script blocks are handled at the moment we reach them, so a meta date tag
// and a JSON-LD date compete by position in the page.
// =============================================================================

use scraper::{ElementRef, Html};
use tracing::debug;

use super::record::MetadataRecord;
use super::structured::extract_date_from_structured_data;

// The record field a meta tag feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Url,
    Title,
    Description,
    Image,
    Source,
    /// Only fills the date if nothing has yet
    PublishDate,
}

// Recognised meta keys (from `property`, or `name` as an alias).
//
// Keys are matched case-sensitively.
pub const META_KEYS: &[(&str, MetaField)] = &[
    ("og:url", MetaField::Url),
    ("og:title", MetaField::Title),
    ("og:description", MetaField::Description),
    ("og:image", MetaField::Image),
    ("og:site_name", MetaField::Source),
    ("article:published_time", MetaField::PublishDate),
    ("datePublished", MetaField::PublishDate),
    ("pubdate", MetaField::PublishDate),
    ("publishdate", MetaField::PublishDate),
    ("DC.date.issued", MetaField::PublishDate),
    ("article:modified_time", MetaField::PublishDate),
];

// Script `type` values whose contents we treat as structured data
pub const STRUCTURED_DATA_TYPES: &[&str] = &["application/ld+json", "application/json"];

// Walks the document and fills the record from meta tags and script blocks
//
// Parameters:
//   document: the parsed page
//   record: the record being built (mutated in place)
//
// Returns: the raw text of every JSON/JSON-LD script block, in document order
pub fn walk_markup(document: &Html, record: &mut MetadataRecord) -> Vec<String> {
    let mut structured_blocks = Vec::new();

    // descendants() is a pre-order walk: exactly document order
    for node in document.tree.root().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        match element.value().name() {
            "meta" => apply_meta(element, record),
            "script" => {
                if let Some(text) = structured_data_text(element) {
                    extract_date_from_structured_data(&text, record);
                    structured_blocks.push(text);
                }
            }
            _ => {}
        }
    }

    structured_blocks
}

// Looks up which field a meta key maps to, if any
pub fn meta_field(key: &str) -> Option<MetaField> {
    META_KEYS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, field)| *field)
}

// Applies one <meta> element to the record
fn apply_meta(element: ElementRef<'_>, record: &mut MetadataRecord) {
    let attrs = element.value();

    // property takes priority when both are present
    let Some(key) = attrs.attr("property").or_else(|| attrs.attr("name")) else {
        return;
    };
    let Some(field) = meta_field(key) else {
        return;
    };
    let content = attrs.attr("content").unwrap_or("");

    match field {
        MetaField::Url => record.url = content.to_string(),
        MetaField::Title => record.title = content.to_string(),
        MetaField::Description => record.description = content.to_string(),
        MetaField::Image => record.image = content.to_string(),
        MetaField::Source => record.set_source(content),
        MetaField::PublishDate => {
            if record.offer_publish_date(content) {
                debug!(key, date = content, "publish date from meta tag");
            }
        }
    }
}

// Returns the first text child of a JSON/JSON-LD <script>, if this is one
fn structured_data_text(element: ElementRef<'_>) -> Option<String> {
    let media_type = element.value().attr("type")?.trim();
    let is_structured = STRUCTURED_DATA_TYPES
        .iter()
        .any(|known| media_type.eq_ignore_ascii_case(known));
    if !is_structured {
        return None;
    }

    let child = element.first_child()?;
    child.value().as_text().map(|text| text.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why descendants() instead of a CSS selector?
//    - We need meta tags AND script blocks in one pass, interleaved
//    - Position decides which date wins, so both kinds must be seen in the
//      order they appear in the page
//
// 2. What is ElementRef::wrap?
//    - The tree holds every kind of node (text, comments, elements...)
//    - wrap() returns Some only for element nodes, so we can read tag names
//      and attributes
//
// 3. What is `let ... else`?
//    - Binds a pattern or runs the else block (which must return/continue)
//    - Keeps the happy path unindented
// -----------------------------------------------------------------------------

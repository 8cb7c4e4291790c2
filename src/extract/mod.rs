// src/extract/mod.rs
// =============================================================================
// This module turns one fetched page into one MetadataRecord.
//
// Submodules:
// - record: the MetadataRecord type
// - markup: single document-order walk over meta tags and script blocks
// - structured: publish date from JSON-LD blocks
// - url_date: publish date from patterns in the URL
// - slug: short identifier from the URL
// - pipeline: runs the above in fallback order
//
// Everything in here is pure: no network, no disk. The fixed lists that
// decide precedence (meta keys, JSON-LD date fields, URL date patterns) are
// ordered constants so the order can be read and tested on its own.
// =============================================================================

mod markup;
mod pipeline;
mod record;
mod slug;
mod structured;
mod url_date;

pub use pipeline::build_record;
pub use record::MetadataRecord;

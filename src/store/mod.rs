// src/store/mod.rs
// =============================================================================
// This module persists extracted records to disk.
//
// Submodules:
// - collection: append to the {"articles": [...]} file, or write one record
// - backup: dated copy of the file before it is overwritten
// =============================================================================

mod backup;
mod collection;

pub use collection::{append_record, write_standalone};

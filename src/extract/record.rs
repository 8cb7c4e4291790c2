// src/extract/record.rs
// =============================================================================
// The record we build for one article.
//
// One MetadataRecord is created per extraction, filled in by the markup walk
// and the date fallbacks, and then handed to the storage layer.
//
// JSON shape (matches the article collection file):
//   {
//     "url": "...", "title": "...", "description": "...", "image": "...",
//     "slug": "...", "publishDate": "...", "source": "..."
//   }
// publishDate and source are left out entirely when we don't have them.
// =============================================================================

use serde::{Deserialize, Serialize};

// Metadata extracted from a single article page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// Canonical URL (from og:url)
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Preview image URL (from og:image)
    #[serde(default)]
    pub image: String,
    /// Short identifier derived from the requested URL
    #[serde(default)]
    pub slug: String,
    /// Publication date, stored verbatim as found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    /// Site name (from og:site_name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl MetadataRecord {
    /// Returns true once any strategy has supplied a publication date
    pub fn has_publish_date(&self) -> bool {
        self.publish_date.is_some()
    }

    /// Sets the publication date unless one is already present.
    ///
    /// Empty values count as "not found" and never occupy the slot, so a
    /// later strategy still gets its turn. Returns true if the value was taken.
    pub fn offer_publish_date(&mut self, value: &str) -> bool {
        if self.has_publish_date() || value.is_empty() {
            return false;
        }
        self.publish_date = Some(value.to_string());
        true
    }

    /// Replaces the site name; an empty value clears it.
    pub fn set_source(&mut self, value: &str) {
        self.source = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

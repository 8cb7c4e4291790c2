// src/extract/slug.rs
// =============================================================================
// Derives a short identifying token ("slug") from an article URL.
//
// Examples:
//   https://example.com/posts/how-to-code?source=x#y  ->  how-to-code
//   https://example.com/blog/                         ->  blog
//   https://example.com                               ->  example
//
// This never fails: when nothing better is available we fall back to the
// first label of the host, and finally to an empty string.
// =============================================================================

// Maps a URL to its slug
//
// Parameters:
//   url: any URL-ish string (scheme optional)
//
// Returns: the slug; never fails, may be empty
pub fn derive_slug(url: &str) -> String {
    // Drop "<scheme>://"
    let mut clean = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };

    // Drop the query string and the fragment
    if let Some(idx) = clean.find('?') {
        clean = &clean[..idx];
    }
    if let Some(idx) = clean.find('#') {
        clean = &clean[..idx];
    }

    // Only one trailing slash is removed; any others show up as empty segments
    let clean = clean.strip_suffix('/').unwrap_or(clean);

    // The first component is the host, the rest are path segments
    let segments: Vec<&str> = clean.split('/').skip(1).collect();

    if let Some(last) = segments.last().filter(|s| !s.is_empty()) {
        return last.to_string();
    }

    if let Some(segment) = segments.iter().rev().find(|s| !s.is_empty()) {
        return segment.to_string();
    }

    // Bare domain: naive "first label" fallback (www.example.com -> www)
    clean
        .split('.')
        .next()
        .map(str::to_string)
        .unwrap_or_default()
}

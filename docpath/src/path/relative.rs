//! Minimal relative path computation.
//!
//! This module computes the shortest relative path from a source reference
//! to a destination reference: both endpoints are canonicalized through
//! absolute resolution, their directory-segment walks are compared to find
//! the divergence point, and the result climbs with `../` steps before
//! descending into the destination. Results never start with `/`; a
//! same-directory result starts with `./`.

use crate::error::{Error, Result};
use crate::path::absolute::resolve_absolute;
use crate::path::normalize::collapse_slashes;
use crate::path::types::SplitPath;

/// Compute the minimal relative path from `source` to `destination`.
///
/// The source must itself be expressible as a descendant-or-equal path once
/// canonicalized against the root; anything else is a caller contract
/// violation surfaced as [`Error::InvalidSource`]. A destination that is
/// already relative after canonicalization (first segment `.` or `..`) is
/// trusted and returned verbatim rather than re-derived.
///
/// # Errors
///
/// Returns [`Error::InvalidSource`] when the canonicalized source ascends
/// above the root.
///
/// # Examples
///
/// ```
/// use docpath::path::relative::resolve_relative;
///
/// let rel = resolve_relative("/foo/bar/index.md", "/foo/qux/baz.md").unwrap();
/// assert_eq!(rel, "../qux/baz.md");
///
/// // An empty destination points back at the source document itself
/// let rel = resolve_relative("/foo/bar/index.md", "").unwrap();
/// assert_eq!(rel, "./index.md");
/// ```
pub fn resolve_relative(source: &str, destination: &str) -> Result<String> {
    // Canonicalize the source against the root. A source with no canonical
    // form, or one still carrying a `..` prefix, cannot anchor a relative
    // walk.
    let canonical_source = resolve_absolute("/", source).ok_or_else(|| Error::InvalidSource {
        path: source.to_string(),
    })?;
    let mut canonical_source = canonical_source.trim_start_matches('/');
    if canonical_source.starts_with("..") {
        return Err(Error::InvalidSource {
            path: source.to_string(),
        });
    }
    if let Some(stripped) = canonical_source.strip_prefix("./") {
        canonical_source = stripped;
    }

    // Canonicalize the destination against the canonical source. A
    // destination with no canonical form (pure ascent) degrades to the
    // empty path, which the diff below renders as bare `../` steps.
    let canonical_destination =
        resolve_absolute(canonical_source, destination).unwrap_or_default();
    let canonical_destination = canonical_destination.trim_start_matches('/');

    // Already-relative destinations are trusted and passed through.
    let first_segment = canonical_destination.split('/').next().unwrap_or_default();
    if first_segment == "." || first_segment == ".." {
        log::debug!("destination {destination:?} is already relative, passing through");
        return Ok(canonical_destination.to_string());
    }

    let destination_split = SplitPath::split(canonical_destination);
    // The source's filename plays no part in the walk; only its directory
    // segments anchor the comparison.
    let source_split = SplitPath::split(canonical_source);

    let source_segments = source_split.segments();
    let destination_segments = destination_split.segments();

    // First index at which the walks diverge, or at which the destination
    // runs out of segments.
    let divergence = (0..source_segments.len())
        .find(|&i| destination_segments.get(i) != Some(&source_segments[i]));

    let mut relative = String::new();
    match divergence {
        Some(index) => {
            for _ in index..source_segments.len() {
                relative.push_str("../");
            }
            let start = destination_segments.len().min(index);
            relative.push_str(&destination_segments[start..].join("/"));
        }
        None => {
            relative.push_str("./");
            relative.push_str(&destination_segments[source_segments.len()..].join("/"));
        }
    }

    relative.push('/');
    if let Some(filename) = destination_split.filename() {
        relative.push_str(&filename.to_string());
    }

    Ok(collapse_slashes(&relative))
}

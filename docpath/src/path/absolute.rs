//! Canonical absolute path resolution.
//!
//! This module resolves a destination reference against a source path into
//! a canonical absolute path: one leading `/`, no duplicate separators, and
//! no remaining `.` or `..` segments. A reference with no canonical form —
//! one that ascends above the root, or leaves unresolvable dot-segments
//! behind — resolves to `None` rather than to a clamped or guessed path.

use crate::path::normalize::normalize;

/// Characters that make a segment opaque to `..` collapsing: a `..` cannot
/// remove a preceding segment containing any of them, so the pair is left
/// in place and fails the residue check.
const OPAQUE_CHARS: [char; 8] = ['?', '%', '*', ':', '|', '"', '<', '>'];

/// Resolve a destination reference against a source path.
///
/// An empty destination resolves the source itself; an absolute destination
/// (leading `/`) is used unchanged; a relative destination is joined onto
/// the source's directory. The joined path then has its `.` and `..`
/// segments collapsed, and the result is returned with exactly one leading
/// slash. A trailing `#fragment` on the destination is carried through
/// untouched.
///
/// Returns `None` when the reference cannot be canonicalized, e.g. when a
/// `..` would ascend above the root.
///
/// # Examples
///
/// ```
/// use docpath::path::absolute::resolve_absolute;
///
/// assert_eq!(
///     resolve_absolute("index.md", "foo/bar/foo.md").as_deref(),
///     Some("/foo/bar/foo.md")
/// );
/// assert_eq!(
///     resolve_absolute("foo/bar/index.md", "../baz.md").as_deref(),
///     Some("/foo/baz.md")
/// );
/// assert_eq!(resolve_absolute("foo/bar/index.md", "../../../qux.md"), None);
/// ```
#[must_use]
pub fn resolve_absolute(source: &str, destination: &str) -> Option<String> {
    let source = normalize(source);
    let destination = normalize(destination);

    let working = if destination.is_empty() {
        source
    } else if destination.starts_with('/') {
        destination
    } else {
        // Join the relative destination onto the source's directory. A
        // source not ending in `/` contributes only its directory part.
        let destination = destination.strip_prefix("./").unwrap_or(&destination);
        let directory = if source.ends_with('/') {
            source.as_str()
        } else {
            parent_directory(&source)
        };
        let directory = directory.trim_end_matches('/');
        let directory = if directory == "." { "" } else { directory };
        format!("{directory}/{destination}")
    };

    // Drop `/./` occurrences in one left-to-right pass; residues that
    // survive (overlapping runs, a leading `./`) fail the check below.
    let working = working.replace("/./", "/");

    let collapsed = collapse_parent_segments(&working)?;

    // Any `./` left over marks an unresolvable or malformed reference.
    if collapsed.contains("./") {
        return None;
    }

    Some(format!("/{}", collapsed.trim_start_matches('/')))
}

/// The directory part of a path that does not end in `/`.
fn parent_directory(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => ".",
    }
}

/// Collapse `<segment>/..` pairs over the whole path.
///
/// Each segment is pushed onto a stack; a `..` pops the previous segment if
/// it is collapsible, and is otherwise kept in place as a residue. A `..`
/// arriving on an empty stack would ascend above the root, so resolution
/// fails. A `..` collapsed at the very end of the path leaves a directory
/// path (trailing slash), matching the textual collapse it replaces.
fn collapse_parent_segments(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let leading_slash = path.starts_with('/');
    let mut trailing_slash = path.ends_with('/') && !path.is_empty();

    let mut stack: Vec<&str> = Vec::new();
    for (index, &segment) in segments.iter().enumerate() {
        if segment == ".." {
            match stack.last() {
                Some(top) if is_collapsible(top) => {
                    stack.pop();
                    if index == segments.len() - 1 {
                        trailing_slash = true;
                    }
                }
                Some(_) => stack.push(segment),
                None => return None,
            }
        } else {
            stack.push(segment);
        }
    }

    let mut result = String::with_capacity(path.len());
    if leading_slash {
        result.push('/');
    }
    result.push_str(&stack.join("/"));
    if trailing_slash && !stack.is_empty() {
        result.push('/');
    }
    Some(result)
}

/// Whether a `..` may remove this segment.
fn is_collapsible(segment: &str) -> bool {
    segment != "." && segment != ".." && !segment.contains(OPAQUE_CHARS)
}

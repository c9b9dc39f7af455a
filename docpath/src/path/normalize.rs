//! Path separator normalization.
//!
//! This module uniformizes a single path string by:
//! - Replacing every backslash with a forward slash
//! - Collapsing every run of two or more slashes into exactly one

/// Normalize the separators of a path string.
///
/// Backslashes become forward slashes and duplicate slashes collapse to a
/// single one. The function is pure and total: every input string has a
/// normalized form, and normalizing twice gives the same result as
/// normalizing once.
///
/// # Examples
///
/// ```
/// use docpath::path::normalize::normalize;
///
/// assert_eq!(normalize(r"foo\bar\baz.md"), "foo/bar/baz.md");
/// assert_eq!(normalize("foo//bar///baz.md"), "foo/bar/baz.md");
/// assert_eq!(normalize("/already/clean.md"), "/already/clean.md");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    collapse_slashes(&path.replace('\\', "/"))
}

/// Collapse every run of two or more slashes into a single slash.
///
/// Unlike [`normalize`], backslashes are left untouched; this is the final
/// cleanup step applied to internally assembled paths, which can pick up
/// doubled separators when empty components are joined.
///
/// # Examples
///
/// ```
/// use docpath::path::normalize::collapse_slashes;
///
/// assert_eq!(collapse_slashes("..//baz.md"), "../baz.md");
/// assert_eq!(collapse_slashes(".//"), "./");
/// ```
#[must_use]
pub fn collapse_slashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut previous_was_slash = false;

    for c in path.chars() {
        if c == '/' {
            if !previous_was_slash {
                result.push(c);
            }
            previous_was_slash = true;
        } else {
            result.push(c);
            previous_was_slash = false;
        }
    }

    result
}

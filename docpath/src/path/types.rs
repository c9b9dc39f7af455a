//! Core types for path decomposition.
//!
//! This module defines the segment-level view of a path used by the
//! relative resolver: an ordered list of directory segments plus the
//! trailing filename component, with any `#fragment` suffix carried as its
//! own field rather than as raw string content.

use std::fmt;

/// The trailing component of a path, with its fragment split off.
///
/// A fragment is any suffix beginning at the first `#` of the final
/// component. It is never interpreted as path content; it is only
/// re-attached verbatim when the filename is rendered back into a path.
///
/// # Examples
///
/// ```
/// use docpath::path::types::Filename;
///
/// let filename = Filename::parse("guide.md#setup");
/// assert_eq!(filename.name(), "guide.md");
/// assert_eq!(filename.fragment(), Some("setup"));
/// assert_eq!(filename.to_string(), "guide.md#setup");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filename {
    name: String,
    fragment: Option<String>,
}

impl Filename {
    /// Parse a raw trailing component, splitting off the fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::path::types::Filename;
    ///
    /// let plain = Filename::parse("index.md");
    /// assert_eq!(plain.name(), "index.md");
    /// assert_eq!(plain.fragment(), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('#') {
            Some((name, fragment)) => Self {
                name: name.to_string(),
                fragment: Some(fragment.to_string()),
            },
            None => Self {
                name: raw.to_string(),
                fragment: None,
            },
        }
    }

    /// The filename without its fragment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.name, fragment),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A path decomposed into directory segments and a trailing filename.
///
/// Splitting is purely lexical: `.` and `..` are not interpreted here and
/// are assumed to have been eliminated by absolute resolution beforehand.
/// A path ending in `/` has no filename.
///
/// # Examples
///
/// ```
/// use docpath::path::types::SplitPath;
///
/// let split = SplitPath::split("foo/bar/baz.md");
/// assert_eq!(split.segments(), ["foo", "bar"]);
/// assert_eq!(split.filename().unwrap().name(), "baz.md");
///
/// let directory = SplitPath::split("foo/bar/");
/// assert_eq!(directory.segments(), ["foo", "bar"]);
/// assert!(directory.filename().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    segments: Vec<String>,
    filename: Option<Filename>,
}

impl SplitPath {
    /// Split a path on `/`, extracting the trailing component.
    #[must_use]
    pub fn split(path: &str) -> Self {
        let mut parts: Vec<&str> = path.split('/').collect();
        let last = parts.pop().unwrap_or_default();

        Self {
            segments: parts.iter().map(ToString::to_string).collect(),
            filename: if last.is_empty() {
                None
            } else {
                Some(Filename::parse(last))
            },
        }
    }

    /// The directory segments, in left-to-right order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The trailing filename component, if the path has one.
    #[must_use]
    pub fn filename(&self) -> Option<&Filename> {
        self.filename.as_ref()
    }
}

//! Logical path resolution without filesystem access.
//!
//! This module is the core of the crate: it resolves and relativizes
//! textual paths the way they appear in hyperlinks and include directives.
//! Paths are plain strings using `/` as the separator; nothing here ever
//! consults a real filesystem, follows symlinks, or interprets URL schemes.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization uniformizes a single path string by:
//! - Replacing every backslash with a forward slash
//! - Collapsing every run of two or more slashes into exactly one
//!
//! ## Absolute resolution
//!
//! [`absolute::resolve_absolute`] canonicalizes a destination reference
//! against a source path, eliminating `.` and `..` segments. A reference
//! that would ascend above the root has no canonical form and resolves to
//! `None`.
//!
//! ## Relative resolution
//!
//! [`relative::resolve_relative`] canonicalizes both endpoints and then
//! diffs their segment lists, emitting `../` for each level of ascent or a
//! `./` prefix for same-directory results.
//!
//! ## Fragments
//!
//! A trailing `#anchor` suffix on the final component is carried through
//! both resolutions untouched; it is modeled as a field on the filename
//! component (see [`types::Filename`]) and never interpreted as path
//! content.
//!
//! # Examples
//!
//! ```
//! use docpath::path::absolute::resolve_absolute;
//! use docpath::path::relative::resolve_relative;
//!
//! // Canonicalize a relative link found in foo/bar/index.md
//! let target = resolve_absolute("foo/bar/index.md", "../qux.md");
//! assert_eq!(target.as_deref(), Some("/foo/qux.md"));
//!
//! // Ascending past the root has no canonical form
//! assert_eq!(resolve_absolute("foo/bar/index.md", "../../../qux.md"), None);
//!
//! // Shortest route between two documents
//! let rel = resolve_relative("/foo/bar/index.md", "/foo/qux/baz.md").unwrap();
//! assert_eq!(rel, "../qux/baz.md");
//! ```

pub mod absolute;
pub mod normalize;
pub mod relative;
pub mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key operations
pub use absolute::resolve_absolute;
pub use normalize::normalize;
pub use relative::resolve_relative;
pub use types::{Filename, SplitPath};

#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # docpath
//!
//! A library for resolving and relativizing document link paths.
//!
//! Given a source location and a destination reference as they would appear
//! in a hyperlink or include directive, docpath computes the canonical
//! absolute path the reference points at, or the shortest relative path from
//! the source to the destination. Everything operates on plain strings with
//! `/` as the logical separator; no real filesystem is ever consulted.
//!
//! ## Core Operations
//!
//! - [`resolve_absolute`]: canonicalize a destination against a source
//! - [`resolve_relative`]: compute the minimal relative path between two references
//! - [`normalize`]: uniformize separators in a single path string
//!
//! ## Examples
//!
//! ```
//! use docpath::{resolve_absolute, resolve_relative};
//!
//! let absolute = resolve_absolute("foo/bar/index.md", "../baz.md");
//! assert_eq!(absolute.as_deref(), Some("/foo/baz.md"));
//!
//! let relative = resolve_relative("/foo/bar/index.md", "/foo/qux/baz.md").unwrap();
//! assert_eq!(relative, "../qux/baz.md");
//! ```
//!
//! Alongside the path core, the crate carries the small helper modules of
//! the wider toolkit: [`value`] for recursive merge and dotted-path access
//! on JSON values, [`text`] for naming-convention conversions and
//! truncation, [`size`] for byte-size formatting and parsing, and [`image`]
//! for proportional image geometry.

pub mod error;
pub mod image;
pub mod logging;
pub mod path;
pub mod size;
pub mod text;
pub mod value;

// Re-export key operations at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::absolute::resolve_absolute;
pub use path::normalize::normalize;
pub use path::relative::resolve_relative;
pub use path::types::{Filename, SplitPath};

//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `absolute`: resolve a destination reference to a canonical absolute path
//! - `relative`: compute the relative path from a source to a destination
//! - `normalize`: uniformize separators in a path string
//! - `completions`: generate shell completion scripts

pub mod absolute;
pub mod completions;
pub mod normalize;
pub mod relative;

pub use absolute::AbsoluteCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use relative::RelativeCommand;

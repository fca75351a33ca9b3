//! Line and word text diffing.
//!
//! [`lcs::diff`] aligns two token sequences along a longest common subsequence
//! and returns an edit script; [`render::render`] turns a script into unified,
//! context, HTML or hunked patch text. [`server`] exposes both over HTTP.

pub mod config;
pub mod error;
pub mod hunk;
pub mod lcs;
pub mod render;
pub mod server;
pub mod tokenize;

pub use error::DiffError;
pub use lcs::{diff, diff_text, EditKind, EditOperation, EditScript};
pub use render::{render, OutputFormat, RenderOptions};
pub use tokenize::{SplitMode, TokenSequence};

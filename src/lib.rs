//! Batch normalization for a tree of markdown journal notes.
//!
//! `format_md` gives every document a title plus Summary, Highlights and Tags
//! blocks and regenerates the root index; `check_md` strips trailing
//! whitespace and reports long lines and common typos.

pub mod corpus;
pub mod error;
pub mod index;
pub mod lint;
pub mod parser;
pub mod rewrite;
pub mod settings;
pub mod text;

pub use error::{Error, Result};
pub use rewrite::{rewrite, Rewrite};
pub use settings::Settings;

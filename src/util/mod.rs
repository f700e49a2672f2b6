//! Utility modules

pub mod text;

pub use text::{quote, tokenize_quoted};

//! chordmap - context-scoped key binding resolver
//!
//! This crate provides the key map of a terminal feed reader: it resolves
//! (context, chord) pairs to symbolic operations, applies user configuration
//! directives, stores macros and writes its state back out as directives.

pub mod cli;
pub mod config_paths;
pub mod keymap;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use keymap::{ContextMask, KeyMap, KeymapError, Operation, Scope};

//! Context-scoped key binding resolver
//!
//! This module provides a data-driven key map that:
//! - Resolves a (context, chord) pair to a symbolic [`Operation`]
//! - Seeds every context from a compiled-in descriptor table
//! - Applies `bind-key` / `unbind-key` / `macro` configuration directives
//! - Dumps its state back into directives that rebuild it
//!
//! # Architecture
//!
//! ```text
//! config line → tokenize_quoted → KeyMap::handle_action → chord tables / macros
//! input chord → KeyMap::resolve(chord, context) → Operation
//! KeyMap::dump_config → config lines
//! ```
//!
//! # Loading
//!
//! ```ignore
//! let mut keymap = KeyMap::new(ContextMask::NEWSBOAT);
//! let errors = keymap.load_config_str("bind-key ^R reload-all feedlist");
//! assert!(errors.is_empty());
//! ```

mod chord;
mod config;
mod context;
mod defaults;
mod dump;
#[allow(clippy::module_inception)]
mod keymap;
mod macros;
mod operation;

pub use chord::{decode_chord, lookup_key, NIL_CHORD};
pub use config::{load_config_file, ConfigError, ConfigLineError, KeymapError, UNBIND_ALL};
pub use context::{
    contexts, find_context, flag_for, is_valid_context, Context, ContextMask, Scope, ALL_CONTEXTS,
};
pub use defaults::{
    context_mask_and_help, descriptors, name_of, resolve_name, OperationDescriptor, NO_NAME,
};
pub use keymap::{ChordTable, KeyMap, KeyMapDesc};
pub use macros::{parse_macro, MacroCommand, MacroStore, MACRO_SEPARATOR};
pub use operation::{Operation, INTERNAL_MIN};

#[cfg(test)]
mod tests;

//! Configuration directives for the key map
//!
//! Handles the `bind-key`, `unbind-key` and `macro` actions and loads whole
//! configuration texts or files line by line.

use std::path::{Path, PathBuf};

use super::context::{Scope, ALL_CONTEXTS};
use super::keymap::KeyMap;
use super::macros::parse_macro;
use super::operation::Operation;
use crate::util::text::tokenize_quoted;

/// Literal used in place of a chord to clear a whole context
pub const UNBIND_ALL: &str = "-a";

/// Errors raised while applying a directive
///
/// None of these are fatal; the caller decides whether to continue loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    #[error("too few parameters for `{action}'")]
    TooFewParams { action: String },

    #[error("`{0}' is not a valid context")]
    InvalidContext(String),

    #[error("`{0}' is not a valid key command")]
    UnknownOperation(String),

    #[error("`{0}' is not a valid configuration directive")]
    UnknownAction(String),

    #[error("`{0}' is reserved for an internal operation")]
    ReservedChord(String),
}

/// A directive that failed while loading a configuration text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {error}")]
pub struct ConfigLineError {
    /// 1-based line number
    pub line: usize,
    pub error: KeymapError,
}

/// Errors that stop a configuration file from loading at all
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn too_few(action: &str) -> KeymapError {
    KeymapError::TooFewParams {
        action: action.to_string(),
    }
}

fn check_chord(chord: &str) -> Result<(), KeymapError> {
    if KeyMap::is_reserved_chord(chord) {
        return Err(KeymapError::ReservedChord(chord.to_string()));
    }
    Ok(())
}

fn scope_param(params: &[String], index: usize) -> Result<Scope, KeymapError> {
    params
        .get(index)
        .map(String::as_str)
        .unwrap_or(ALL_CONTEXTS)
        .parse()
}

impl KeyMap {
    /// Apply one configuration directive
    ///
    /// Everything is validated before the key map is touched, so an error leaves
    /// it unchanged.
    pub fn handle_action(&mut self, action: &str, params: &[String]) -> Result<(), KeymapError> {
        tracing::debug!(%action, params = params.len(), "handle_action");
        match action {
            "bind-key" => {
                if params.len() < 2 {
                    return Err(too_few(action));
                }
                check_chord(&params[0])?;
                let scope = scope_param(params, 2)?;
                let op: Operation = params[1].parse()?;
                if !op.is_user_bindable() {
                    return Err(KeymapError::UnknownOperation(params[1].clone()));
                }
                self.set_key(op, &params[0], scope);
            }
            "unbind-key" => {
                if params.is_empty() {
                    return Err(too_few(action));
                }
                check_chord(&params[0])?;
                let scope = scope_param(params, 1)?;
                if params[0] == UNBIND_ALL {
                    self.unset_all_keys(scope);
                } else {
                    self.unset_key(&params[0], scope);
                }
            }
            "macro" => {
                let (trigger, commands) = parse_macro(params)?;
                self.define_macro(trigger, commands);
            }
            _ => return Err(KeymapError::UnknownAction(action.to_string())),
        }
        Ok(())
    }

    /// Apply one raw configuration line
    ///
    /// Blank lines and comments are accepted and do nothing.
    pub fn handle_line(&mut self, line: &str) -> Result<(), KeymapError> {
        let tokens = tokenize_quoted(line);
        let Some((action, params)) = tokens.split_first() else {
            return Ok(());
        };
        self.handle_action(action, params)
    }

    /// Apply every line of a configuration text
    ///
    /// A malformed line is logged and skipped; loading continues with the next
    /// one. The returned list holds every failure with its line number.
    pub fn load_config_str(&mut self, text: &str) -> Vec<ConfigLineError> {
        let mut errors = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if let Err(error) = self.handle_line(line) {
                let line = idx + 1;
                tracing::warn!(line, %error, "ignoring configuration line");
                errors.push(ConfigLineError { line, error });
            }
        }
        errors
    }
}

/// Load a configuration file into a key map
///
/// I/O failures abort; directive failures are returned and the rest of the file
/// is still applied.
pub fn load_config_file(
    keymap: &mut KeyMap,
    path: &Path,
) -> Result<Vec<ConfigLineError>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let errors = keymap.load_config_str(&content);
    tracing::info!(
        "Loaded key configuration from {} ({} errors)",
        path.display(),
        errors.len()
    );
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_bind_key_default_context_is_all() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("bind-key", &params(&["x", "quit"]))
            .unwrap();
        assert_eq!(keymap.resolve("x", "feedlist"), Operation::Quit);
        assert_eq!(keymap.resolve("x", "urlview"), Operation::Quit);
    }

    #[test]
    fn test_bind_key_single_context() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("bind-key", &params(&["x", "quit", "article"]))
            .unwrap();
        assert_eq!(keymap.resolve("x", "article"), Operation::Quit);
        assert_eq!(keymap.resolve("x", "feedlist"), Operation::Nil);
    }

    #[test]
    fn test_bind_key_accepts_alias() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("bind-key", &params(&["T", "select-tag", "feedlist"]))
            .unwrap();
        assert_eq!(keymap.resolve("T", "feedlist"), Operation::SetTag);
    }

    #[test]
    fn test_bind_key_too_few_params() {
        let mut keymap = KeyMap::default();
        let err = keymap
            .handle_action("bind-key", &params(&["x"]))
            .unwrap_err();
        assert_eq!(
            err,
            KeymapError::TooFewParams {
                action: "bind-key".to_string()
            }
        );
    }

    #[test]
    fn test_bind_key_invalid_context_changes_nothing() {
        let mut keymap = KeyMap::default();
        let before = keymap.clone();
        let err = keymap
            .handle_action("bind-key", &params(&["x", "quit", "nosuchcontext"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::InvalidContext("nosuchcontext".to_string()));
        assert_eq!(err.to_string(), "`nosuchcontext' is not a valid context");
        assert_eq!(keymap, before);
    }

    #[test]
    fn test_bind_key_unknown_operation_changes_nothing() {
        let mut keymap = KeyMap::default();
        let before = keymap.clone();
        let err = keymap
            .handle_action("bind-key", &params(&["x", "frobnicate"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::UnknownOperation("frobnicate".to_string()));
        assert_eq!(keymap, before);
    }

    #[test]
    fn test_bind_key_rejects_internal_operation() {
        let mut keymap = KeyMap::default();
        let err = keymap
            .handle_action("bind-key", &params(&["x", "set"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::UnknownOperation("set".to_string()));
    }

    #[test]
    fn test_bind_key_internal_chord_is_rejected() {
        let mut keymap = KeyMap::default();
        let before = keymap.clone();
        let err = keymap
            .handle_action("bind-key", &params(&["end-question", "quit", "feedlist"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::ReservedChord("end-question".to_string()));
        assert_eq!(keymap, before);
        assert_eq!(
            keymap.resolve("end-question", "feedlist"),
            Operation::IntEndQuestion
        );
    }

    #[test]
    fn test_unbind_key_internal_chord_is_rejected() {
        let mut keymap = KeyMap::default();
        let before = keymap.clone();
        let err = keymap
            .handle_action("unbind-key", &params(&["internal-resize"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "`internal-resize' is reserved for an internal operation"
        );
        assert_eq!(keymap, before);
        assert_eq!(
            keymap.resolve("internal-resize", "feedlist"),
            Operation::IntResize
        );
    }

    #[test]
    fn test_bind_key_empty_chord_resolves() {
        let mut keymap = KeyMap::default();
        keymap.handle_line(r#"bind-key "" quit feedlist"#).unwrap();
        assert_eq!(keymap.resolve("", "feedlist"), Operation::Quit);
        assert!(keymap
            .dump_config()
            .contains(&"bind-key NIL quit feedlist".to_string()));
    }

    #[test]
    fn test_unbind_key() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("unbind-key", &params(&["q", "feedlist"]))
            .unwrap();
        assert_eq!(keymap.resolve("q", "feedlist"), Operation::Nil);
        assert_eq!(keymap.resolve("q", "article"), Operation::Quit);

        keymap.handle_action("unbind-key", &params(&["q"])).unwrap();
        assert_eq!(keymap.resolve("q", "article"), Operation::Nil);
    }

    #[test]
    fn test_unbind_all_in_context() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("unbind-key", &params(&["-a", "articlelist"]))
            .unwrap();
        assert_eq!(keymap.resolve("ENTER", "articlelist"), Operation::Nil);
        assert_eq!(
            keymap.resolve("end-question", "articlelist"),
            Operation::IntEndQuestion
        );
        assert_eq!(keymap.resolve("ENTER", "feedlist"), Operation::Open);
    }

    #[test]
    fn test_unbind_key_invalid_context_changes_nothing() {
        let mut keymap = KeyMap::default();
        let before = keymap.clone();
        let err = keymap
            .handle_action("unbind-key", &params(&["-a", "nosuchcontext"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::InvalidContext("nosuchcontext".to_string()));
        assert_eq!(keymap, before);
    }

    #[test]
    fn test_unbind_key_too_few_params() {
        let mut keymap = KeyMap::default();
        assert!(matches!(
            keymap.handle_action("unbind-key", &[]),
            Err(KeymapError::TooFewParams { .. })
        ));
    }

    #[test]
    fn test_macro_directive() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("macro", &params(&["gg", "open", ";", "next"]))
            .unwrap();
        let cmds = keymap.get_macro("gg");
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].op, Operation::Open);
        assert_eq!(cmds[1].op, Operation::Next);
        assert!(cmds.iter().all(|c| c.args.is_empty()));
    }

    #[test]
    fn test_macro_unknown_operation_is_atomic() {
        let mut keymap = KeyMap::default();
        keymap
            .handle_action("macro", &params(&["gg", "open"]))
            .unwrap();
        let err = keymap
            .handle_action("macro", &params(&["gg", "quit", ";", "bogus"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::UnknownOperation("bogus".to_string()));
        assert_eq!(keymap.get_macro("gg")[0].op, Operation::Open);
    }

    #[test]
    fn test_unknown_action() {
        let mut keymap = KeyMap::default();
        let err = keymap
            .handle_action("bind-keys", &params(&["x", "quit"]))
            .unwrap_err();
        assert_eq!(err, KeymapError::UnknownAction("bind-keys".to_string()));
    }

    #[test]
    fn test_handle_line_blank_and_comment() {
        let mut keymap = KeyMap::default();
        let before = keymap.clone();
        keymap.handle_line("").unwrap();
        keymap.handle_line("   # just a comment").unwrap();
        assert_eq!(keymap, before);
    }

    #[test]
    fn test_load_config_str_continues_after_errors() {
        let mut keymap = KeyMap::default();
        let text = "bind-key x quit\nbind-key y nope\n\nunbind-key q bogus\nbind-key z sort feedlist\n";
        let errors = keymap.load_config_str(text);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line, 2);
        assert_eq!(errors[1].line, 4);
        assert_eq!(
            errors[0].to_string(),
            "line 2: `nope' is not a valid key command"
        );

        assert_eq!(keymap.resolve("x", "feedlist"), Operation::Quit);
        assert_eq!(keymap.resolve("z", "feedlist"), Operation::Sort);
        assert_eq!(keymap.resolve("q", "feedlist"), Operation::Quit);
    }
}

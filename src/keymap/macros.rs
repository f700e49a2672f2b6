//! Macro store: one chord triggers an ordered list of operations
//!
//! A `macro` directive looks like
//!
//! ```text
//! macro v set browser "mpv %u" ; open-in-browser ; set browser firefox
//! ```
//!
//! The first parameter is the trigger, the rest are command groups separated by
//! a bare `;` token.

use std::collections::BTreeMap;

use super::config::KeymapError;
use super::defaults::resolve_name;
use super::operation::Operation;

/// Token that separates command groups inside a macro
pub const MACRO_SEPARATOR: &str = ";";

/// One step of a macro: an operation and its verbatim arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroCommand {
    pub op: Operation,
    pub args: Vec<String>,
}

impl MacroCommand {
    pub fn new(op: Operation) -> Self {
        Self {
            op,
            args: Vec::new(),
        }
    }

    /// Add arguments to this command (builder pattern)
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Trigger chord → command list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroStore {
    macros: BTreeMap<String, Vec<MacroCommand>>,
}

impl MacroStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a macro, replacing any previous one on the same trigger
    pub fn define(&mut self, trigger: impl Into<String>, commands: Vec<MacroCommand>) {
        let trigger = trigger.into();
        tracing::debug!(%trigger, commands = commands.len(), "defining macro");
        self.macros.insert(trigger, commands);
    }

    /// Commands for a trigger; empty when no macro is defined
    pub fn lookup(&self, trigger: &str) -> &[MacroCommand] {
        self.macros.get(trigger).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All macros in trigger order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MacroCommand])> {
        self.macros.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

/// Parse the parameters of a `macro` directive into a trigger and its commands
///
/// Nothing is returned unless every group names a known operation. Empty groups
/// (`; ;`, a leading or trailing `;`) contribute no command.
pub fn parse_macro(params: &[String]) -> Result<(String, Vec<MacroCommand>), KeymapError> {
    let (trigger, rest) = params.split_first().ok_or(KeymapError::TooFewParams {
        action: "macro".to_string(),
    })?;

    let mut commands = Vec::new();
    for group in rest.split(|token| token == MACRO_SEPARATOR) {
        let Some((name, args)) = group.split_first() else {
            continue;
        };
        let op = resolve_name(name);
        if op.is_nil() {
            return Err(KeymapError::UnknownOperation(name.clone()));
        }
        tracing::debug!(operation = %name, args = args.len(), "parsed macro command");
        commands.push(MacroCommand::new(op).with_args(args.iter().cloned()));
    }

    Ok((trigger.clone(), commands))
}

//! KeyMap struct: per-context chord tables plus the macro store

use std::collections::BTreeMap;

use serde::Serialize;

use super::chord::lookup_key;
use super::context::{contexts, find_context, Context, ContextMask, Scope};
use super::defaults::descriptors;
use super::macros::{MacroCommand, MacroStore};
use super::operation::Operation;

/// Chord text → operation for one context, ordered by chord
pub type ChordTable = BTreeMap<String, Operation>;

/// One line of the help view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyMapDesc {
    /// Bound chord; empty for an operation with no chord in this context
    pub key: String,
    /// Operation name; only set on the first entry of an operation
    pub cmd: String,
    /// Help text; only set on the first entry of an operation
    pub desc: String,
    /// Context name
    pub ctx: String,
    /// Contexts the operation's descriptor applies to
    pub flags: ContextMask,
}

/// The key binding store
///
/// Holds one [`ChordTable`] per concrete context, seeded from the descriptor
/// table at construction, and the [`MacroStore`]. All mutation goes through
/// `&mut self`, so a single owner serializes every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Indexed by registry position of the context
    tables: Vec<ChordTable>,
    macros: MacroStore,
}

impl KeyMap {
    /// Create a key map seeded with the default bindings of an application
    ///
    /// `enabled` selects the application flavor, usually
    /// [`ContextMask::NEWSBOAT`] or [`ContextMask::PODBOAT`]. Internal operations
    /// and system keys are installed regardless.
    pub fn new(enabled: ContextMask) -> Self {
        tracing::debug!(enabled = %enabled, "seeding key map");
        let always = ContextMask::always_active();
        let mut tables = vec![ChordTable::new(); contexts().len()];

        for desc in descriptors() {
            if !desc.contexts.intersects(enabled | always) || desc.default_chord.is_empty() {
                continue;
            }
            for ctx in contexts() {
                if desc.contexts.intersects(ctx.mask() | always) {
                    tables[ctx.index()].insert(desc.default_chord.to_string(), desc.op);
                }
            }
        }

        Self {
            tables,
            macros: MacroStore::new(),
        }
    }

    /// Check whether a chord is the fixed chord of an internal operation
    pub fn is_reserved_chord(chord: &str) -> bool {
        descriptors()
            .iter()
            .any(|d| d.op.is_internal() && d.default_chord == chord)
    }

    /// Chord table containing exactly the internal operations
    pub fn internal_operations() -> ChordTable {
        descriptors()
            .iter()
            .filter(|d| d.op.is_internal())
            .map(|d| (d.default_chord.to_string(), d.op))
            .collect()
    }

    fn table(&self, context: &str) -> Option<&ChordTable> {
        match find_context(context) {
            Some(ctx) => Some(&self.tables[ctx.index()]),
            None => {
                tracing::warn!(%context, "lookup in unknown context");
                None
            }
        }
    }

    /// Bind a chord to an operation, overwriting any previous binding
    ///
    /// With [`Scope::All`] each context's table is updated on its own, so a later
    /// per-context override only touches that context.
    ///
    /// An empty chord is stored under [`NIL_CHORD`](super::chord::NIL_CHORD),
    /// the key [`KeyMap::resolve`] looks it up with. Chords of internal
    /// operations are left alone.
    pub fn set_key(&mut self, op: Operation, chord: &str, scope: Scope) {
        tracing::debug!(operation = %op, %chord, %scope, "set_key");
        self.store(lookup_key(chord), op, scope);
    }

    /// Unbind a chord; it stays in the table mapped to [`Operation::Nil`]
    ///
    /// Chords of internal operations stay bound.
    pub fn unset_key(&mut self, chord: &str, scope: Scope) {
        tracing::debug!(%chord, %scope, "unset_key");
        self.store(lookup_key(chord), Operation::Nil, scope);
    }

    fn store(&mut self, key: &str, op: Operation, scope: Scope) {
        if Self::is_reserved_chord(key) {
            tracing::warn!(chord = %key, "chord belongs to an internal operation, not changed");
            return;
        }
        for ctx in scope.contexts() {
            self.tables[ctx.index()].insert(key.to_string(), op);
        }
    }

    /// Drop every binding, keeping only the internal operations
    pub fn unset_all_keys(&mut self, scope: Scope) {
        tracing::debug!(%scope, "unset_all_keys");
        let internal = Self::internal_operations();
        for ctx in scope.contexts() {
            self.tables[ctx.index()] = internal.clone();
        }
    }

    /// Resolve a chord in a context
    ///
    /// Returns [`Operation::Nil`] for unbound chords and for unknown contexts.
    /// An empty chord is looked up as [`NIL_CHORD`](super::chord::NIL_CHORD).
    pub fn resolve(&self, chord: &str, context: &str) -> Operation {
        let key = lookup_key(chord);
        let op = self
            .table(context)
            .and_then(|table| table.get(key).copied())
            .unwrap_or(Operation::Nil);
        tracing::debug!(%chord, %context, operation = %op, "resolve");
        op
    }

    /// All chords bound to `op` in a context, in chord order
    pub fn chords_for(&self, op: Operation, context: &str) -> Vec<String> {
        self.table(context)
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, bound)| **bound == op)
                    .map(|(chord, _)| chord.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Chord table of one context
    pub fn bindings(&self, ctx: Context) -> &ChordTable {
        &self.tables[ctx.index()]
    }

    /// Install a macro, replacing any previous one on the same trigger
    pub fn define_macro(&mut self, trigger: impl Into<String>, commands: Vec<MacroCommand>) {
        self.macros.define(trigger, commands);
    }

    /// Commands of the macro on `trigger`; empty when none is defined
    pub fn get_macro(&self, trigger: &str) -> &[MacroCommand] {
        self.macros.lookup(trigger)
    }

    pub fn macros(&self) -> &MacroStore {
        &self.macros
    }

    /// Entries for the help view of one application
    ///
    /// For each context the application shows, every applicable operation is
    /// listed once per chord bound to it; operations without a chord get one
    /// entry with an empty key.
    pub fn descriptions(&self, app: ContextMask) -> Vec<KeyMapDesc> {
        let mut descs = Vec::new();

        for ctx in contexts() {
            let is_podboat = ctx.mask() == ContextMask::PODBOAT;
            if app.intersects(ContextMask::PODBOAT) && !is_podboat {
                continue;
            }
            if app.intersects(ContextMask::NEWSBOAT) && is_podboat {
                continue;
            }

            let table = &self.tables[ctx.index()];
            for d in descriptors().iter().filter(|d| d.contexts.intersects(app)) {
                let mut already_added = false;
                for (chord, _) in table.iter().filter(|(_, op)| **op == d.op && !op.is_nil()) {
                    let mut desc = KeyMapDesc {
                        key: chord.clone(),
                        ctx: ctx.name().to_string(),
                        flags: d.contexts,
                        ..Default::default()
                    };
                    if !already_added {
                        desc.cmd = d.name.to_string();
                        desc.desc = d.help.unwrap_or_default().to_string();
                        already_added = true;
                    }
                    descs.push(desc);
                }

                if !already_added {
                    tracing::debug!(operation = d.name, context = ctx.name(), "unbound operation");
                    descs.push(KeyMapDesc {
                        cmd: d.name.to_string(),
                        desc: d.help.unwrap_or_default().to_string(),
                        ctx: ctx.name().to_string(),
                        flags: d.contexts,
                        ..Default::default()
                    });
                }
            }
        }

        descs
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(ContextMask::NEWSBOAT)
    }
}

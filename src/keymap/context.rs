//! Context registry and context bitmasks
//!
//! Every UI mode (feed list, article view, ...) owns an independent chord table.
//! Contexts are identified by name in configuration and by a bit in [`ContextMask`]
//! inside the descriptor table. Bit 0 belongs to the pseudo-context `all` and is
//! never handed out; concrete contexts start at bit 1.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::config::KeymapError;

/// Name of the pseudo-context that expands to every concrete context
pub const ALL_CONTEXTS: &str = "all";

const SYSKEYS_POSITION: u32 = 12;
const INTERNAL_POSITION: u32 = 13;

/// Set of contexts and operation classes, stored as a bitfield
///
/// Context bits follow registry order. Reordering [`contexts()`] changes the
/// meaning of every mask in the descriptor table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContextMask(u32);

impl ContextMask {
    pub const NONE: ContextMask = ContextMask(0);

    pub const FEEDLIST: ContextMask = ContextMask::bit(1);
    pub const FILEBROWSER: ContextMask = ContextMask::bit(2);
    pub const HELP: ContextMask = ContextMask::bit(3);
    pub const ARTICLELIST: ContextMask = ContextMask::bit(4);
    pub const ARTICLE: ContextMask = ContextMask::bit(5);
    pub const TAGSELECT: ContextMask = ContextMask::bit(6);
    pub const FILTERSELECT: ContextMask = ContextMask::bit(7);
    pub const URLVIEW: ContextMask = ContextMask::bit(8);
    pub const PODBOAT: ContextMask = ContextMask::bit(9);
    pub const DIALOGS: ContextMask = ContextMask::bit(10);
    pub const DIRBROWSER: ContextMask = ContextMask::bit(11);

    /// System keys (arrows, paging, redraw) are available in every context
    pub const SYSKEYS: ContextMask = ContextMask::bit(SYSKEYS_POSITION);
    /// Internal operations are available in every context
    pub const INTERNAL: ContextMask = ContextMask::bit(INTERNAL_POSITION);

    /// Every context of the reader application
    pub const NEWSBOAT: ContextMask = ContextMask(
        Self::FEEDLIST.0
            | Self::FILEBROWSER.0
            | Self::HELP.0
            | Self::ARTICLELIST.0
            | Self::ARTICLE.0
            | Self::TAGSELECT.0
            | Self::FILTERSELECT.0
            | Self::URLVIEW.0
            | Self::DIALOGS.0
            | Self::DIRBROWSER.0,
    );
    /// Both applications
    pub const BOTH: ContextMask = ContextMask(Self::NEWSBOAT.0 | Self::PODBOAT.0);

    /// Mask with a single bit set
    const fn bit(position: u32) -> Self {
        ContextMask(1 << position)
    }

    /// Union of several masks, usable in const tables
    pub const fn any(masks: &[ContextMask]) -> ContextMask {
        let mut bits = 0;
        let mut i = 0;
        while i < masks.len() {
            bits |= masks[i].0;
            i += 1;
        }
        ContextMask(bits)
    }

    /// Raw bits
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two masks
    #[inline]
    pub const fn union(self, other: ContextMask) -> ContextMask {
        ContextMask(self.0 | other.0)
    }

    /// Check if any bit is shared with other
    #[inline]
    pub const fn intersects(self, other: ContextMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if this contains all bits in other
    #[inline]
    pub const fn contains(self, other: ContextMask) -> bool {
        (self.0 & other.0) == other.0
    }

    /// The two classes that are active in every context
    #[inline]
    pub const fn always_active() -> ContextMask {
        Self::SYSKEYS.union(Self::INTERNAL)
    }
}

impl std::ops::BitOr for ContextMask {
    type Output = ContextMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for ContextMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for ContextMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = contexts()
            .iter()
            .filter(|ctx| self.intersects(ctx.mask()))
            .map(|ctx| ctx.name())
            .collect();
        if self.intersects(Self::SYSKEYS) {
            parts.push("syskeys");
        }
        if self.intersects(Self::INTERNAL) {
            parts.push("internal");
        }
        write!(f, "{}", parts.join("|"))
    }
}

/// A concrete UI context with its stable bit position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Context {
    name: &'static str,
    position: u32,
}

impl Context {
    const fn new(name: &'static str, position: u32) -> Self {
        Self { name, position }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Bit position, starting at 1
    pub const fn position(self) -> u32 {
        self.position
    }

    /// Mask holding only this context's bit
    pub const fn mask(self) -> ContextMask {
        ContextMask::bit(self.position)
    }

    /// Zero-based index into [`contexts()`]
    pub(crate) const fn index(self) -> usize {
        (self.position - 1) as usize
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const CONTEXT_COUNT: usize = 11;

static CONTEXTS: [Context; CONTEXT_COUNT] = [
    Context::new("feedlist", 1),
    Context::new("filebrowser", 2),
    Context::new("help", 3),
    Context::new("articlelist", 4),
    Context::new("article", 5),
    Context::new("tagselection", 6),
    Context::new("filterselection", 7),
    Context::new("urlview", 8),
    Context::new("podboat", 9),
    Context::new("dialogs", 10),
    Context::new("dirbrowser", 11),
];

// Context bits must stay below the class bits.
const _: () = assert!((CONTEXT_COUNT as u32) < SYSKEYS_POSITION);

/// All concrete contexts in registry order
pub fn contexts() -> &'static [Context] {
    &CONTEXTS
}

/// Look up a concrete context by name (`all` is not a concrete context)
pub fn find_context(name: &str) -> Option<Context> {
    CONTEXTS.iter().copied().find(|ctx| ctx.name == name)
}

/// Check whether a directive may name this context
pub fn is_valid_context(name: &str) -> bool {
    name == ALL_CONTEXTS || find_context(name).is_some()
}

/// Effective mask of a context: its own bit plus the always-active classes
///
/// Returns an empty mask for `all` and unknown names.
pub fn flag_for(name: &str) -> ContextMask {
    find_context(name)
        .map(|ctx| ctx.mask() | ContextMask::always_active())
        .unwrap_or(ContextMask::NONE)
}

/// Target of a binding directive: every context, or just one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Only(Context),
}

impl Scope {
    /// Parse a context argument, returning `None` for unknown names
    pub fn parse(name: &str) -> Option<Scope> {
        if name == ALL_CONTEXTS {
            Some(Scope::All)
        } else {
            find_context(name).map(Scope::Only)
        }
    }

    /// Concrete contexts covered by this scope, in registry order
    pub fn contexts(self) -> &'static [Context] {
        match self {
            Scope::All => &CONTEXTS,
            Scope::Only(ctx) => std::slice::from_ref(&CONTEXTS[ctx.index()]),
        }
    }
}

impl FromStr for Scope {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::parse(s).ok_or_else(|| KeymapError::InvalidContext(s.to_string()))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str(ALL_CONTEXTS),
            Scope::Only(ctx) => f.write_str(ctx.name),
        }
    }
}

//! Operation enum representing every symbolic action a chord can resolve to
//!
//! Operations are only identifiers. Nothing in this crate executes them; the
//! input loop matches on the resolved value and dispatches to the UI.

/// First discriminant of the internal range
///
/// Operations at or above this value are programmatic-only: they are seeded into
/// every context, survive `unbind-key -a`, and are never written by the serializer.
pub const INTERNAL_MIN: u16 = 1000;

/// All operations known to the key map
///
/// The numeric layout matters: `Nil` is zero and everything from
/// [`INTERNAL_MIN`] upwards is internal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Operation {
    /// No operation; the result of looking up an unbound chord
    #[default]
    Nil = 0,

    // ========================================================================
    // General
    // ========================================================================
    Open = 1,
    SwitchFocus,
    Quit,
    HardQuit,
    Reload,
    ReloadAll,
    MarkFeedRead,
    MarkAllFeedsRead,
    MarkAllAboveAsRead,
    Save,
    SaveAll,

    // ========================================================================
    // Article navigation
    // ========================================================================
    Next,
    Prev,
    NextUnread,
    PrevUnread,
    RandomUnread,
    OpenInBrowserAndMark,
    OpenAllUnreadInBrowser,
    OpenAllUnreadInBrowserAndMark,
    OpenInBrowser,
    Help,
    ToggleSourceView,
    ToggleItemRead,
    ToggleShowRead,
    ShowUrls,
    ClearTag,
    SetTag,
    Search,
    GotoUrl,
    Enqueue,
    ReloadUrls,

    // ========================================================================
    // Download manager
    // ========================================================================
    PbDownload,
    PbCancel,
    PbDelete,
    PbPurge,
    PbToggleDownloadAll,
    PbPlay,
    PbMarkFinished,
    PbMoreDownloads,
    PbLessDownloads,

    // ========================================================================
    // Dialogs, filters and lists
    // ========================================================================
    Redraw,
    Cmdline,
    SetFilter,
    SelectFilter,
    ClearFilter,
    Bookmark,
    EditFlags,
    NextFeed,
    PrevFeed,
    NextUnreadFeed,
    PrevUnreadFeed,
    MacroPrefix,
    Delete,
    DeleteAll,
    PurgeDeleted,
    EditUrls,
    CloseDialog,
    ViewDialogs,
    NextDialog,
    PrevDialog,
    PipeTo,
    Sort,
    RevSort,

    // ========================================================================
    // URL shortcuts
    // ========================================================================
    Url0,
    Url1,
    Url2,
    Url3,
    Url4,
    Url5,
    Url6,
    Url7,
    Url8,
    Url9,

    // ========================================================================
    // System keys (bound in every context)
    // ========================================================================
    SkUp,
    SkDown,
    SkPageUp,
    SkPageDown,
    SkHome,
    SkEnd,

    // ========================================================================
    // Internal (programmatic only)
    // ========================================================================
    IntEndQuestion = INTERNAL_MIN,
    IntCancelQna,
    IntQnaNextHistory,
    IntQnaPrevHistory,
    IntResize,
    IntSet,
    IntGotoUrl,
}

impl Operation {
    /// Numeric value of this operation
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Whether this is the "no operation" sentinel
    #[inline]
    pub const fn is_nil(self) -> bool {
        matches!(self, Operation::Nil)
    }

    /// Whether this operation lies in the internal range
    #[inline]
    pub const fn is_internal(self) -> bool {
        self.code() >= INTERNAL_MIN
    }

    /// Whether a user may bind this operation to a chord
    pub const fn is_user_bindable(self) -> bool {
        !self.is_nil() && !self.is_internal()
    }
}

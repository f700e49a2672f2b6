//! Operation registry: the compiled-in descriptor table
//!
//! Each row ties an operation to a canonical name, a default chord, the contexts
//! it applies to and a help line. An operation may appear in several rows under
//! different names (`set-tag` / `select-tag`); name lookup accepts any of them,
//! while [`name_of`] always reports the first row.

use std::fmt;
use std::str::FromStr;

use super::config::KeymapError;
use super::context::ContextMask;
use super::operation::Operation;

/// Placeholder returned by [`name_of`] for operations without a descriptor
pub const NO_NAME: &str = "<none>";

/// One row of the operation registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub op: Operation,
    /// Name used in `bind-key` and `macro` directives
    pub name: &'static str,
    /// Chord bound at startup; empty means unbound by default
    pub default_chord: &'static str,
    pub help: Option<&'static str>,
    pub contexts: ContextMask,
}

const fn desc(
    op: Operation,
    name: &'static str,
    default_chord: &'static str,
    help: &'static str,
    contexts: ContextMask,
) -> OperationDescriptor {
    OperationDescriptor {
        op,
        name,
        default_chord,
        help: Some(help),
        contexts,
    }
}

const fn internal(op: Operation, name: &'static str, default_chord: &'static str) -> OperationDescriptor {
    OperationDescriptor {
        op,
        name,
        default_chord,
        help: None,
        contexts: ContextMask::INTERNAL,
    }
}

const FEEDLIST: ContextMask = ContextMask::FEEDLIST;
const FILEBROWSER: ContextMask = ContextMask::FILEBROWSER;
const HELP: ContextMask = ContextMask::HELP;
const ARTICLELIST: ContextMask = ContextMask::ARTICLELIST;
const ARTICLE: ContextMask = ContextMask::ARTICLE;
const TAGSELECT: ContextMask = ContextMask::TAGSELECT;
const FILTERSELECT: ContextMask = ContextMask::FILTERSELECT;
const URLVIEW: ContextMask = ContextMask::URLVIEW;
const PODBOAT: ContextMask = ContextMask::PODBOAT;
const DIALOGS: ContextMask = ContextMask::DIALOGS;
const DIRBROWSER: ContextMask = ContextMask::DIRBROWSER;
const SYSKEYS: ContextMask = ContextMask::SYSKEYS;
const NEWSBOAT: ContextMask = ContextMask::NEWSBOAT;
const BOTH: ContextMask = ContextMask::BOTH;

const LISTS: ContextMask = ContextMask::any(&[FEEDLIST, ARTICLELIST]);
const READING: ContextMask = ContextMask::any(&[FEEDLIST, ARTICLELIST, ARTICLE]);
const URLS: ContextMask = ContextMask::any(&[URLVIEW, ARTICLE]);

static DESCRIPTORS: &[OperationDescriptor] = &[
    desc(
        Operation::Open,
        "open",
        "ENTER",
        "Open feed/article",
        ContextMask::any(&[
            FEEDLIST,
            FILEBROWSER,
            ARTICLELIST,
            TAGSELECT,
            FILTERSELECT,
            URLVIEW,
            DIALOGS,
            DIRBROWSER,
        ]),
    ),
    desc(
        Operation::SwitchFocus,
        "switch-focus",
        "TAB",
        "Switch focus between widgets",
        ContextMask::any(&[FILEBROWSER, DIRBROWSER]),
    ),
    desc(Operation::Quit, "quit", "q", "Return to previous dialog/Quit", BOTH),
    desc(Operation::HardQuit, "hard-quit", "Q", "Quit program, no confirmation", BOTH),
    desc(Operation::Reload, "reload", "r", "Reload currently selected feed", LISTS),
    desc(Operation::ReloadAll, "reload-all", "R", "Reload all feeds", FEEDLIST),
    desc(Operation::MarkFeedRead, "mark-feed-read", "A", "Mark feed read", LISTS),
    desc(
        Operation::MarkAllFeedsRead,
        "mark-all-feeds-read",
        "C",
        "Mark all feeds read",
        FEEDLIST,
    ),
    desc(
        Operation::MarkAllAboveAsRead,
        "mark-all-above-as-read",
        "",
        "Mark all above as read",
        ARTICLELIST,
    ),
    desc(
        Operation::Save,
        "save",
        "s",
        "Save article",
        ContextMask::any(&[ARTICLELIST, ARTICLE]),
    ),
    desc(Operation::SaveAll, "save-all", "", "Save articles", ARTICLELIST),
    desc(Operation::Next, "next", "J", "Go to next article", READING),
    desc(Operation::Prev, "prev", "K", "Go to previous article", READING),
    desc(Operation::NextUnread, "next-unread", "n", "Go to next unread article", READING),
    desc(
        Operation::PrevUnread,
        "prev-unread",
        "p",
        "Go to previous unread article",
        READING,
    ),
    desc(
        Operation::RandomUnread,
        "random-unread",
        "^K",
        "Go to a random unread article",
        READING,
    ),
    desc(
        Operation::OpenInBrowserAndMark,
        "open-in-browser-and-mark-read",
        "O",
        "Open article in browser and mark read",
        ARTICLELIST,
    ),
    desc(
        Operation::OpenAllUnreadInBrowser,
        "open-all-unread-in-browser",
        "",
        "Open all unread items of selected feed in browser",
        LISTS,
    ),
    desc(
        Operation::OpenAllUnreadInBrowserAndMark,
        "open-all-unread-in-browser-and-mark-read",
        "",
        "Open all unread items of selected feed in browser and mark read",
        LISTS,
    ),
    desc(
        Operation::OpenInBrowser,
        "open-in-browser",
        "o",
        "Open article in browser",
        READING,
    ),
    desc(
        Operation::Help,
        "help",
        "?",
        "Open help dialog",
        ContextMask::any(&[FEEDLIST, ARTICLELIST, ARTICLE, PODBOAT]),
    ),
    desc(
        Operation::ToggleSourceView,
        "toggle-source-view",
        "^U",
        "Toggle source view",
        ARTICLE,
    ),
    desc(
        Operation::ToggleItemRead,
        "toggle-article-read",
        "N",
        "Toggle read status for article",
        ContextMask::any(&[ARTICLELIST, ARTICLE]),
    ),
    desc(
        Operation::ToggleShowRead,
        "toggle-show-read-feeds",
        "l",
        "Toggle show read feeds/articles",
        LISTS,
    ),
    desc(
        Operation::ShowUrls,
        "show-urls",
        "u",
        "Show URLs in current article",
        ContextMask::any(&[ARTICLE, ARTICLELIST]),
    ),
    desc(Operation::ClearTag, "clear-tag", "^T", "Clear current tag", FEEDLIST),
    desc(Operation::SetTag, "set-tag", "t", "Select tag", FEEDLIST),
    desc(Operation::SetTag, "select-tag", "t", "Select tag", FEEDLIST),
    desc(
        Operation::Search,
        "open-search",
        "/",
        "Open search dialog",
        ContextMask::any(&[FEEDLIST, HELP, ARTICLELIST, ARTICLE]),
    ),
    desc(Operation::GotoUrl, "goto-url", "#", "Goto URL #", ARTICLE),
    desc(Operation::Enqueue, "enqueue", "e", "Add download to queue", ARTICLE),
    desc(
        Operation::ReloadUrls,
        "reload-urls",
        "^R",
        "Reload the list of URLs from the configuration",
        FEEDLIST,
    ),
    desc(Operation::PbDownload, "pb-download", "d", "Download file", PODBOAT),
    desc(Operation::PbCancel, "pb-cancel", "c", "Cancel download", PODBOAT),
    desc(Operation::PbDelete, "pb-delete", "D", "Mark download as deleted", PODBOAT),
    desc(
        Operation::PbPurge,
        "pb-purge",
        "P",
        "Purge finished and deleted downloads from queue",
        PODBOAT,
    ),
    desc(
        Operation::PbToggleDownloadAll,
        "pb-toggle-download-all",
        "a",
        "Toggle automatic download on/off",
        PODBOAT,
    ),
    desc(
        Operation::PbPlay,
        "pb-play",
        "p",
        "Start player with currently selected download",
        PODBOAT,
    ),
    desc(
        Operation::PbMarkFinished,
        "pb-mark-as-finished",
        "m",
        "Mark file as finished (not played)",
        PODBOAT,
    ),
    desc(
        Operation::PbMoreDownloads,
        "pb-increase-max-dls",
        "+",
        "Increase the number of concurrent downloads",
        PODBOAT,
    ),
    // The misspelled name is what existing configuration files use.
    desc(
        Operation::PbLessDownloads,
        "pb-decreate-max-dls",
        "-",
        "Decrease the number of concurrent downloads",
        PODBOAT,
    ),
    desc(Operation::Redraw, "redraw", "^L", "Redraw screen", SYSKEYS),
    desc(Operation::Cmdline, "cmdline", ":", "Open the commandline", NEWSBOAT),
    desc(Operation::SetFilter, "set-filter", "F", "Set a filter", LISTS),
    desc(
        Operation::SelectFilter,
        "select-filter",
        "f",
        "Select a predefined filter",
        LISTS,
    ),
    desc(
        Operation::ClearFilter,
        "clear-filter",
        "^F",
        "Clear currently set filter",
        ContextMask::any(&[FEEDLIST, HELP, ARTICLELIST]),
    ),
    desc(
        Operation::Bookmark,
        "bookmark",
        "^B",
        "Bookmark current link/article",
        ContextMask::any(&[ARTICLELIST, ARTICLE, URLVIEW]),
    ),
    desc(
        Operation::EditFlags,
        "edit-flags",
        "^E",
        "Edit flags",
        ContextMask::any(&[ARTICLELIST, ARTICLE]),
    ),
    desc(Operation::NextFeed, "next-feed", "j", "Go to next feed", ARTICLELIST),
    desc(Operation::PrevFeed, "prev-feed", "k", "Go to previous feed", ARTICLELIST),
    desc(
        Operation::NextUnreadFeed,
        "next-unread-feed",
        "^N",
        "Go to next unread feed",
        ARTICLELIST,
    ),
    desc(
        Operation::PrevUnreadFeed,
        "prev-unread-feed",
        "^P",
        "Go to previous unread feed",
        ARTICLELIST,
    ),
    desc(Operation::MacroPrefix, "macro-prefix", ",", "Call a macro", NEWSBOAT),
    desc(
        Operation::Delete,
        "delete-article",
        "D",
        "Delete article",
        ContextMask::any(&[ARTICLELIST, ARTICLE]),
    ),
    desc(
        Operation::DeleteAll,
        "delete-all-articles",
        "^D",
        "Delete all articles",
        ARTICLELIST,
    ),
    desc(
        Operation::PurgeDeleted,
        "purge-deleted",
        "$",
        "Purge deleted articles",
        ARTICLELIST,
    ),
    desc(Operation::EditUrls, "edit-urls", "E", "Edit subscribed URLs", LISTS),
    desc(
        Operation::CloseDialog,
        "close-dialog",
        "^X",
        "Close currently selected dialog",
        DIALOGS,
    ),
    desc(
        Operation::ViewDialogs,
        "view-dialogs",
        "v",
        "View list of open dialogs",
        NEWSBOAT,
    ),
    desc(Operation::NextDialog, "next-dialog", "^V", "Go to next dialog", NEWSBOAT),
    desc(Operation::PrevDialog, "prev-dialog", "^G", "Go to previous dialog", NEWSBOAT),
    desc(
        Operation::PipeTo,
        "pipe-to",
        "|",
        "Pipe article to command",
        ContextMask::any(&[ARTICLE, ARTICLELIST]),
    ),
    desc(Operation::Sort, "sort", "g", "Sort current list", LISTS),
    desc(Operation::RevSort, "rev-sort", "G", "Sort current list (reverse)", LISTS),
    desc(Operation::Url0, "zero", "0", "Open URL 10", URLS),
    desc(Operation::Url1, "one", "1", "Open URL 1", URLS),
    desc(Operation::Url2, "two", "2", "Open URL 2", URLS),
    desc(Operation::Url3, "three", "3", "Open URL 3", URLS),
    desc(Operation::Url4, "four", "4", "Open URL 4", URLS),
    desc(Operation::Url5, "five", "5", "Open URL 5", URLS),
    desc(Operation::Url6, "six", "6", "Open URL 6", URLS),
    desc(Operation::Url7, "seven", "7", "Open URL 7", URLS),
    desc(Operation::Url8, "eight", "8", "Open URL 8", URLS),
    desc(Operation::Url9, "nine", "9", "Open URL 9", URLS),
    desc(Operation::SkUp, "up", "UP", "Move to the previous entry", SYSKEYS),
    desc(Operation::SkDown, "down", "DOWN", "Move to the next entry", SYSKEYS),
    desc(Operation::SkPageUp, "pageup", "PAGEUP", "Move to the previous page", SYSKEYS),
    desc(Operation::SkPageDown, "pagedown", "PAGEDOWN", "Move to the next page", SYSKEYS),
    desc(Operation::SkHome, "home", "HOME", "Move to the start of page/list", SYSKEYS),
    desc(Operation::SkEnd, "end", "END", "Move to the end of page/list", SYSKEYS),
    internal(Operation::IntEndQuestion, "XXXNOKEY-end-question", "end-question"),
    internal(Operation::IntCancelQna, "XXXNOKEY-cancel-qna", "cancel-qna"),
    internal(
        Operation::IntQnaNextHistory,
        "XXXNOKEY-qna-next-history",
        "qna-next-history",
    ),
    internal(
        Operation::IntQnaPrevHistory,
        "XXXNOKEY-qna-prev-history",
        "qna-prev-history",
    ),
    internal(Operation::IntResize, "RESIZE", "internal-resize"),
    internal(Operation::IntSet, "set", "internal-set"),
    internal(Operation::IntGotoUrl, "gotourl", "internal-goto-url"),
];

/// Every descriptor row, aliases included, in table order
pub fn descriptors() -> &'static [OperationDescriptor] {
    DESCRIPTORS
}

/// Map a configuration name to its operation
///
/// Unknown names yield [`Operation::Nil`]; this never fails loudly.
pub fn resolve_name(name: &str) -> Operation {
    DESCRIPTORS
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.op)
        .unwrap_or(Operation::Nil)
}

/// Canonical name of an operation: the first matching row, or [`NO_NAME`]
pub fn name_of(op: Operation) -> &'static str {
    DESCRIPTORS
        .iter()
        .find(|d| d.op == op)
        .map(|d| d.name)
        .unwrap_or(NO_NAME)
}

/// Union of the context masks of every row for `op`, plus the first help text
pub fn context_mask_and_help(op: Operation) -> (ContextMask, Option<&'static str>) {
    let mut mask = ContextMask::NONE;
    let mut help = None;
    for d in DESCRIPTORS.iter().filter(|d| d.op == op) {
        mask |= d.contexts;
        help = help.or(d.help);
    }
    (mask, help)
}

impl FromStr for Operation {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match resolve_name(s) {
            Operation::Nil => Err(KeymapError::UnknownOperation(s.to_string())),
            op => Ok(op),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(name_of(*self))
    }
}

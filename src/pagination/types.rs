//! Pagination types
//!
//! Terminal states, the per-run accumulator and the collection result.

use crate::types::Page;
use std::collections::HashSet;

/// Why a collection run stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The remote returned a page with no items
    EmptyPage,
    /// The last item of a page carried no cursor
    MissingCursor,
    /// The remote returned fewer items than requested
    ShortPage,
    /// The remote handed back a cursor already followed in this run
    CursorRepeated {
        /// The repeated cursor
        cursor: String,
    },
    /// The page ceiling was reached before the end of the list
    IterationLimit,
}

impl Termination {
    /// The list may be incomplete
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::CursorRepeated { .. } | Self::IterationLimit)
    }

    /// The list is known to be exhaustive
    pub fn is_complete(&self) -> bool {
        !self.is_partial()
    }

    /// Short label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyPage => "empty_page",
            Self::MissingCursor => "missing_cursor",
            Self::ShortPage => "short_page",
            Self::CursorRepeated { .. } => "cursor_repeated",
            Self::IterationLimit => "iteration_limit",
        }
    }
}

/// Outcome of absorbing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Fetch the next page after this cursor
    Next(String),
    /// Stop in the given terminal state
    Stop(Termination),
}

impl Step {
    /// Check if pagination should continue
    pub fn is_next(&self) -> bool {
        matches!(self, Self::Next(_))
    }
}

/// Accumulator for a single collection run
///
/// Lives for one call to `collect` and is dropped on return, so cursor
/// cycle detection never leaks between runs.
#[derive(Debug, Clone, Default)]
pub struct CollectorState {
    /// Cursor the next request starts after
    pub cursor: Option<String>,
    /// Identifiers in remote order
    pub ids: Vec<String>,
    /// Cursors already followed
    pub seen_cursors: HashSet<String>,
    /// Pages fetched so far
    pub pages: u32,
    /// Pages that came back with a full `page_size` of items
    pub full_pages: u32,
}

impl CollectorState {
    /// Create a new, empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a page into the state and decide what happens next
    ///
    /// Guards are checked in order: empty page, missing trailing cursor,
    /// repeated cursor, short page (when enabled).
    pub fn absorb(&mut self, page: Page, page_size: u32, stop_on_short_page: bool) -> Step {
        self.pages += 1;
        if page.len() >= page_size as usize {
            self.full_pages += 1;
        }

        if page.is_empty() {
            return Step::Stop(Termination::EmptyPage);
        }

        self.ids.extend(page.item_ids().map(str::to_string));

        let Some(cursor) = page.last_cursor() else {
            return Step::Stop(Termination::MissingCursor);
        };

        if !self.seen_cursors.insert(cursor.to_string()) {
            return Step::Stop(Termination::CursorRepeated {
                cursor: cursor.to_string(),
            });
        }

        if stop_on_short_page && page.len() < page_size as usize {
            return Step::Stop(Termination::ShortPage);
        }

        self.cursor = Some(cursor.to_string());
        Step::Next(cursor.to_string())
    }

    /// Every allowed page was fetched and every one was full
    ///
    /// The ceiling, not the end of the data, bounded the run, even when the
    /// last page happened to carry no cursor.
    pub fn hit_ceiling(&self, max_iterations: u32) -> bool {
        self.pages >= max_iterations && self.full_pages == self.pages
    }

    /// Finish the run
    pub fn finish(self, termination: Termination) -> CollectionResult {
        CollectionResult {
            ids: self.ids,
            pages: self.pages,
            termination,
        }
    }
}

/// Identifiers collected for one account
///
/// `total` and `partial` are derived from the ids and the terminal state,
/// so they cannot drift from the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionResult {
    ids: Vec<String>,
    pages: u32,
    termination: Termination,
}

impl CollectionResult {
    /// Identifiers in remote order (newest first)
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Take ownership of the identifiers
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }

    /// Number of identifiers
    pub fn total(&self) -> usize {
        self.ids.len()
    }

    /// The list may be incomplete and must not be treated as exhaustive
    pub fn partial(&self) -> bool {
        self.termination.is_partial()
    }

    /// Pages fetched during the run
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Terminal state that ended the run
    pub fn termination(&self) -> &Termination {
        &self.termination
    }
}

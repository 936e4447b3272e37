//! Generic paged list controller.
//!
//! Drives any "search, page, select" table. The controller is a pure
//! state machine - it never performs I/O itself. A caller begins an
//! operation (which validates and transitions to `Loading`), issues
//! the fetch through the gateway, then reports the outcome with
//! [`PagedList::complete`] or [`PagedList::fail`]:
//!
//! ```text
//! Idle ── begin_search ──> Loading ── complete ──> Ready
//!                             │                      │
//!                             └──── fail ──> Error ──┘ (retryable)
//! ```
//!
//! Pagination follows the backend's cursor contract: the last row of a
//! page carries the opaque key for the next page, and its absence
//! means the search is exhausted.

use thiserror::Error;

/// Rows a [`PagedList`] can manage.
pub trait PageRow {
    /// Natural primary key; selection stays stable across refreshes.
    fn row_key(&self) -> &str;
    /// Cursor value this row carries for the following page.
    fn next_key(&self) -> Option<&str>;
}

impl PageRow for ledgerdesk_core::UserRecord {
    fn row_key(&self) -> &str {
        &self.user_uid
    }

    fn next_key(&self) -> Option<&str> {
        self.next_key.as_deref()
    }
}

/// Default visible page size.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Controller lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is in flight; new operations are rejected.
    Loading,
    /// The last fetch completed.
    Ready,
    /// The last fetch failed; previously loaded rows are preserved and
    /// the controller stays retryable.
    Error(String),
}

/// How the in-flight fetch integrates its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    /// New search: rows replace the collection.
    Replace,
    /// Next page: rows append to the collection.
    Append,
}

/// Rejected list operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// A fetch is already in flight.
    #[error("a fetch is already in progress")]
    Busy,
    /// `load_more` without a cursor; no call may be issued.
    #[error("no further pages are available")]
    NoCursor,
}

/// Generic "search → page → select" list controller.
#[derive(Debug)]
pub struct PagedList<T> {
    state: ListState,
    mode: FetchMode,
    rows: Vec<T>,
    cursor: Option<String>,
    page_size: usize,
    page: usize,
}

impl<T: PageRow> Default for PagedList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T: PageRow> PagedList<T> {
    /// Create an idle controller with the given visible page size
    /// (clamped to at least 1).
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            state: ListState::Idle,
            mode: FetchMode::Replace,
            rows: Vec::new(),
            cursor: None,
            page_size: if page_size == 0 { 1 } else { page_size },
            page: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    /// All accumulated rows.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Visible page index (zero-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// True when a cursor for the next page is available.
    #[must_use]
    pub const fn can_load_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Begin a fresh search. Rows are replaced only when the fetch
    /// completes, so a failure never clobbers what is on screen.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Busy`] while a fetch is in flight.
    pub fn begin_search(&mut self) -> Result<(), ListError> {
        self.guard_idle()?;
        self.mode = FetchMode::Replace;
        self.state = ListState::Loading;
        Ok(())
    }

    /// Begin fetching the next page, returning the cursor to fetch
    /// with.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Busy`] while a fetch is in flight and
    /// [`ListError::NoCursor`] when the previous page carried no next
    /// key - in that case no call may be issued.
    pub fn begin_load_more(&mut self) -> Result<String, ListError> {
        self.guard_idle()?;
        let cursor = self.cursor.clone().ok_or(ListError::NoCursor)?;
        self.mode = FetchMode::Append;
        self.state = ListState::Loading;
        Ok(cursor)
    }

    /// Integrate a fetched page and derive the next cursor from its
    /// last row (cleared when the page is empty or the row carries no
    /// key).
    pub fn complete(&mut self, page_rows: Vec<T>) {
        self.cursor = page_rows
            .last()
            .and_then(|row| row.next_key())
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        match self.mode {
            FetchMode::Replace => {
                self.rows = page_rows;
                self.page = 0;
            }
            FetchMode::Append => {
                // Pre-append count: lands the visible window on the
                // first of the newly appended rows.
                self.page = self.rows.len() / self.page_size;
                self.rows.extend(page_rows);
            }
        }

        self.state = ListState::Ready;
    }

    /// Record a fetch failure. Accumulated rows are preserved and
    /// `begin_search`/`begin_load_more` remain callable. A failed
    /// replace-mode fetch also drops the cursor: it belonged to the
    /// search being replaced, and following it would append the new
    /// query's pages onto the old query's rows.
    pub fn fail(&mut self, message: impl Into<String>) {
        if matches!(self.mode, FetchMode::Replace) {
            self.cursor = None;
        }
        self.state = ListState::Error(message.into());
    }

    /// Find a row by its key.
    #[must_use]
    pub fn select(&self, key: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.row_key() == key)
    }

    /// Patch a cached row in place (after a detail save), keyed by the
    /// replacement's own key. Returns false when no row matched.
    pub fn patch_row(&mut self, replacement: T) -> bool {
        let key = replacement.row_key().to_string();
        if let Some(row) = self.rows.iter_mut().find(|row| row.row_key() == key) {
            *row = replacement;
            true
        } else {
            false
        }
    }

    const fn guard_idle(&self) -> Result<(), ListError> {
        if matches!(self.state, ListState::Loading) {
            return Err(ListError::Busy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        key: String,
        next: Option<String>,
        label: String,
    }

    fn row(key: &str, next: Option<&str>, label: &str) -> Row {
        Row {
            key: key.to_string(),
            next: next.map(String::from),
            label: label.to_string(),
        }
    }

    impl PageRow for Row {
        fn row_key(&self) -> &str {
            &self.key
        }

        fn next_key(&self) -> Option<&str> {
            self.next.as_deref()
        }
    }

    #[test]
    fn test_search_replaces_rows() {
        let mut list: PagedList<Row> = PagedList::new(2);

        list.begin_search().unwrap();
        list.complete(vec![row("k1", None, "Kim A"), row("k2", Some("c1"), "Kim B")]);
        assert_eq!(list.rows().len(), 2);
        assert!(list.can_load_more());

        // A second search must fully replace, not append.
        list.begin_search().unwrap();
        list.complete(vec![row("l1", None, "Lee A")]);
        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.rows()[0].label, "Lee A");
        assert_eq!(list.page(), 0);
        assert!(!list.can_load_more());
    }

    #[test]
    fn test_load_more_appends_and_pages() {
        let mut list: PagedList<Row> = PagedList::new(2);

        list.begin_search().unwrap();
        list.complete(vec![row("a", None, "A"), row("b", Some("c1"), "B")]);

        let cursor = list.begin_load_more().unwrap();
        assert_eq!(cursor, "c1");
        list.complete(vec![row("c", None, "C")]);

        assert_eq!(list.rows().len(), 3);
        // Pre-append count 2 / page size 2 = page 1, the new row's page.
        assert_eq!(list.page(), 1);
        assert!(!list.can_load_more());
    }

    #[test]
    fn test_load_more_without_cursor_is_rejected() {
        let mut list: PagedList<Row> = PagedList::new(2);
        assert_eq!(list.begin_load_more(), Err(ListError::NoCursor));

        list.begin_search().unwrap();
        list.complete(vec![row("a", None, "A")]);
        assert_eq!(list.begin_load_more(), Err(ListError::NoCursor));
        assert_eq!(*list.state(), ListState::Ready);
    }

    #[test]
    fn test_empty_next_key_clears_cursor() {
        let mut list: PagedList<Row> = PagedList::new(2);
        list.begin_search().unwrap();
        list.complete(vec![row("a", Some(""), "A")]);
        assert!(!list.can_load_more());
    }

    #[test]
    fn test_failure_preserves_rows_and_stays_retryable() {
        let mut list: PagedList<Row> = PagedList::new(2);
        list.begin_search().unwrap();
        list.complete(vec![row("a", Some("c1"), "A")]);

        list.begin_search().unwrap();
        list.fail("backend unavailable");

        assert_eq!(
            *list.state(),
            ListState::Error("backend unavailable".to_string())
        );
        assert_eq!(list.rows().len(), 1);

        // Retry straight from the error state.
        list.begin_search().unwrap();
        list.complete(vec![row("b", None, "B")]);
        assert_eq!(*list.state(), ListState::Ready);
        assert_eq!(list.rows()[0].label, "B");
    }

    #[test]
    fn test_failed_search_drops_previous_cursor() {
        let mut list: PagedList<Row> = PagedList::new(2);
        list.begin_search().unwrap();
        list.complete(vec![row("kim1", Some("cKim"), "Kim A")]);
        assert!(list.can_load_more());

        // A different search fails; its predecessor's cursor must not
        // leak into the next load-more.
        list.begin_search().unwrap();
        list.fail("backend unavailable");

        assert!(!list.can_load_more());
        assert_eq!(list.begin_load_more(), Err(ListError::NoCursor));
        // The old rows are still on screen.
        assert_eq!(list.rows().len(), 1);
    }

    #[test]
    fn test_failed_load_more_keeps_cursor_for_retry() {
        let mut list: PagedList<Row> = PagedList::new(2);
        list.begin_search().unwrap();
        list.complete(vec![row("a", Some("c1"), "A")]);

        list.begin_load_more().unwrap();
        list.fail("backend unavailable");

        // Same search, same cursor: the page fetch can be retried.
        assert_eq!(list.begin_load_more(), Ok("c1".to_string()));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut list: PagedList<Row> = PagedList::new(0);
        list.begin_search().unwrap();
        list.complete(vec![row("a", Some("c1"), "A")]);
        list.begin_load_more().unwrap();
        list.complete(vec![row("b", None, "B")]);
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_busy_while_loading() {
        let mut list: PagedList<Row> = PagedList::new(2);
        list.begin_search().unwrap();
        assert_eq!(list.begin_search(), Err(ListError::Busy));
        assert_eq!(list.begin_load_more(), Err(ListError::Busy));
    }

    #[test]
    fn test_select_and_patch_by_key() {
        let mut list: PagedList<Row> = PagedList::new(2);
        list.begin_search().unwrap();
        list.complete(vec![row("a", None, "A"), row("b", None, "B")]);

        assert_eq!(list.select("b").map(|r| r.label.as_str()), Some("B"));
        assert!(list.patch_row(row("b", None, "B2")));
        assert_eq!(list.select("b").map(|r| r.label.as_str()), Some("B2"));
        assert!(!list.patch_row(row("zz", None, "Z")));
    }
}

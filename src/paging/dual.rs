use tracing::debug;

use super::cursor::Cursor;
use super::{Page, PageRequest};

/// A list with two paginated modes: a persistent unfiltered browse stream
/// and an optional search stream recreated per distinct filter value.
///
/// The browse cursor lives as long as the list and is never reset, so its
/// accumulated pages survive search excursions untouched. Each non-empty
/// filter value gets a fresh search cursor; responses are tagged with the
/// filter they were issued under, and a tag that no longer matches the
/// active filter is dropped without touching any state. That rule is what
/// keeps fast typing from letting a stale page overwrite the current query's
/// results.
#[derive(Debug)]
pub struct DualList<T> {
    browse: Cursor<T>,
    search: Option<Cursor<T>>,
}

impl<T> DualList<T> {
    pub fn new() -> Self {
        Self {
            browse: Cursor::new(None),
            search: None,
        }
    }

    /// The cursor the view is currently showing.
    fn active(&self) -> &Cursor<T> {
        self.search.as_ref().unwrap_or(&self.browse)
    }

    fn active_mut(&mut self) -> &mut Cursor<T> {
        self.search.as_mut().unwrap_or(&mut self.browse)
    }

    /// Whether a search filter is currently active.
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Items of the active mode, in fetch order.
    pub fn current_items(&self) -> &[T] {
        self.active().items()
    }

    /// Whether the active mode has a request in flight.
    pub fn is_loading(&self) -> bool {
        self.active().in_flight()
    }

    /// Total item count of the active mode, if known.
    pub fn current_total(&self) -> Option<usize> {
        self.active().total()
    }

    /// Scroll-near-end (or initial mount): ask the active cursor for the
    /// next page. `None` when a request is already in flight or the stream
    /// is exhausted.
    pub fn on_end_reached(&mut self, limit: usize) -> Option<PageRequest> {
        self.active_mut().begin(limit)
    }

    /// Drive the filter state machine with the latest text-input value.
    ///
    /// Empty text reverts to browse mode, discarding the search cursor; no
    /// fetch is needed because the browse state was never touched. A
    /// non-empty value that differs from the active filter replaces the
    /// search cursor with a fresh one and returns its first page request.
    /// Re-typing the identical value is a no-op.
    pub fn set_filter(&mut self, text: &str, limit: usize) -> Option<PageRequest> {
        let text = text.trim();
        if text.is_empty() {
            if self.search.take().is_some() {
                debug!("filter cleared, back to browse");
            }
            return None;
        }
        if self.search.as_ref().map(|c| c.filter()) == Some(Some(text)) {
            return None;
        }
        debug!(filter = text, "filter changed, new search stream");
        let mut cursor = Cursor::new(Some(text.to_string()));
        let request = cursor.begin(limit);
        self.search = Some(cursor);
        request
    }

    /// Deliver a fetched page to the cursor it belongs to.
    ///
    /// `filter` is the tag the request was issued under: `None` routes to
    /// the browse cursor (always accepted — browse pages stay valid even
    /// while a search is showing), `Some` routes to the search cursor only
    /// if the tag still matches the active filter. A mismatch means the
    /// response was superseded by a newer keystroke and is dropped.
    pub fn apply_page(&mut self, filter: Option<&str>, page: Page<T>) {
        match filter {
            None => self.browse.apply(page),
            Some(tag) => match self.search.as_mut() {
                Some(cursor) if cursor.filter() == Some(tag) => cursor.apply(page),
                _ => debug!(filter = tag, "stale search page dropped"),
            },
        }
    }

    /// Deliver a fetch failure to the cursor it belongs to, with the same
    /// stale-tag routing as `apply_page`.
    ///
    /// Returns `true` if the failure landed on a live cursor (and should be
    /// surfaced to the user), `false` if it belonged to a superseded filter.
    pub fn apply_failure(&mut self, filter: Option<&str>) -> bool {
        match filter {
            None => {
                self.browse.fail();
                true
            }
            Some(tag) => match self.search.as_mut() {
                Some(cursor) if cursor.filter() == Some(tag) => {
                    cursor.fail();
                    true
                }
                _ => {
                    debug!(filter = tag, "stale search failure dropped");
                    false
                }
            },
        }
    }
}

impl<T> Default for DualList<T> {
    fn default() -> Self {
        Self::new()
    }
}

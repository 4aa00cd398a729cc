use tracing::debug;

use super::{Page, PageRequest};

/// Incremental-loading state machine for one paginated remote collection.
///
/// Accumulates items in fetch order, tracks the server-reported total, and
/// guards against duplicate dispatch: at most one request is in flight per
/// cursor, and no request is issued once the collection is exhausted.
///
/// The next offset is always derived from `items.len()`, never stored, so
/// offset and accumulated state cannot drift apart under re-entrant calls.
#[derive(Debug)]
pub struct Cursor<T> {
    items: Vec<T>,
    /// Server-reported total under this cursor's filter. `None` until the
    /// first page arrives.
    total: Option<usize>,
    in_flight: bool,
    /// Fixed for the lifetime of the cursor; a filter change means a new
    /// cursor, not a mutation.
    filter: Option<String>,
}

impl<T> Cursor<T> {
    /// Create an empty cursor, optionally scoped to a name-prefix filter.
    pub fn new(filter: Option<String>) -> Self {
        Self {
            items: Vec::new(),
            total: None,
            in_flight: false,
            filter,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Whether all available items have been fetched.
    ///
    /// `>=` rather than `==` so a server total that shrinks below what we
    /// already accumulated stops pagination instead of looping.
    pub fn is_exhausted(&self) -> bool {
        match self.total {
            Some(total) => self.items.len() >= total,
            None => false,
        }
    }

    /// Decide whether the next page should be fetched.
    ///
    /// Returns the request to dispatch, or `None` when a request is already
    /// in flight or the collection is exhausted — making scroll-triggered
    /// calls safe to fire repeatedly. On `Some`, the cursor is marked
    /// in-flight until `apply` or `fail` is called.
    pub fn begin(&mut self, limit: usize) -> Option<PageRequest> {
        if self.in_flight || self.is_exhausted() {
            return None;
        }
        self.in_flight = true;
        let request = PageRequest {
            offset: self.items.len(),
            limit,
            filter: self.filter.clone(),
        };
        debug!(
            offset = request.offset,
            limit = request.limit,
            filter = request.filter.as_deref().unwrap_or(""),
            "page request issued"
        );
        Some(request)
    }

    /// Merge a successfully fetched page into the cursor.
    ///
    /// An empty page while the total is still unknown marks the collection
    /// exhausted so we don't poll an empty collection forever.
    pub fn apply(&mut self, page: Page<T>) {
        self.in_flight = false;
        if page.items.is_empty() && self.total.is_none() {
            self.total = Some(self.items.len());
            return;
        }
        self.items.extend(page.items);
        self.total = Some(page.total);
    }

    /// Record a failed fetch: clears the in-flight flag so a later attempt
    /// is permitted, leaves accumulated items and total untouched.
    pub fn fail(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(range: std::ops::Range<u32>, total: usize) -> Page<u32> {
        Page {
            items: range.collect(),
            total,
        }
    }

    #[test]
    fn first_page_from_empty_cursor() {
        let mut cursor: Cursor<u32> = Cursor::new(None);
        assert_eq!(cursor.total(), None);
        assert!(!cursor.is_exhausted());

        let req = cursor.begin(30).expect("request expected");
        assert_eq!(req.offset, 0);
        assert_eq!(req.limit, 30);
        assert_eq!(req.filter, None);
        assert!(cursor.in_flight());

        cursor.apply(page(0..30, 120));
        assert_eq!(cursor.items().len(), 30);
        assert_eq!(cursor.total(), Some(120));
        assert!(!cursor.in_flight());
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn second_page_offset_follows_accumulated_length() {
        let mut cursor: Cursor<u32> = Cursor::new(None);
        cursor.begin(30).expect("first request");
        cursor.apply(page(0..30, 120));

        let req = cursor.begin(30).expect("second request");
        assert_eq!(req.offset, 30);
        cursor.apply(page(30..60, 120));
        assert_eq!(cursor.items().len(), 60);
    }

    #[test]
    fn no_duplicate_dispatch_while_in_flight() {
        let mut cursor: Cursor<u32> = Cursor::new(None);
        assert!(cursor.begin(30).is_some());
        // Repeated scroll-near-end events before the response lands.
        assert!(cursor.begin(30).is_none());
        assert!(cursor.begin(30).is_none());
        assert!(cursor.in_flight());

        cursor.apply(page(0..30, 60));
        assert!(cursor.begin(30).is_some());
    }

    #[test]
    fn exhausted_cursor_never_fetches_again() {
        let mut cursor: Cursor<u32> = Cursor::new(None);
        cursor.begin(120).expect("request");
        cursor.apply(page(0..120, 120));
        assert!(cursor.is_exhausted());

        assert!(cursor.begin(30).is_none());
        assert!(cursor.begin(30).is_none());
        assert_eq!(cursor.items().len(), 120);
        assert_eq!(cursor.total(), Some(120));
        assert!(!cursor.in_flight());
    }

    #[test]
    fn empty_page_with_unknown_total_is_exhaustion() {
        let mut cursor: Cursor<u32> = Cursor::new(Some("Zzz".into()));
        cursor.begin(30).expect("request");
        cursor.apply(Page {
            items: Vec::new(),
            total: 0,
        });
        assert!(cursor.is_exhausted());
        assert!(cursor.begin(30).is_none());
    }

    #[test]
    fn failure_preserves_state_and_allows_retry() {
        let mut cursor: Cursor<u32> = Cursor::new(None);
        cursor.begin(30).expect("request");
        cursor.apply(page(0..30, 90));

        cursor.begin(30).expect("request");
        cursor.fail();
        assert!(!cursor.in_flight());
        assert_eq!(cursor.items().len(), 30);
        assert_eq!(cursor.total(), Some(90));

        // The retry starts from the same offset.
        let retry = cursor.begin(30).expect("retry permitted");
        assert_eq!(retry.offset, 30);
    }

    #[test]
    fn shrinking_server_total_stops_pagination() {
        let mut cursor: Cursor<u32> = Cursor::new(None);
        cursor.begin(30).expect("request");
        cursor.apply(page(0..30, 120));

        cursor.begin(30).expect("request");
        // Server now claims fewer items than we already hold.
        cursor.apply(page(30..60, 10));
        assert!(cursor.is_exhausted());
        assert!(cursor.begin(30).is_none());
    }

    #[test]
    fn filter_is_carried_on_every_request() {
        let mut cursor: Cursor<u32> = Cursor::new(Some("Spi".into()));
        let req = cursor.begin(30).expect("request");
        assert_eq!(req.filter.as_deref(), Some("Spi"));
        cursor.apply(page(0..30, 45));
        let req = cursor.begin(30).expect("request");
        assert_eq!(req.filter.as_deref(), Some("Spi"));
        assert_eq!(req.offset, 30);
    }
}

//! Incremental paginated loading: the cursor state machine and the
//! dual-mode (browse / search) list built on top of it.

pub mod cursor;
pub mod dual;

/// One batch of items plus the collection's total count under the
/// request's filter, as returned by a single remote call.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// A remote page request a cursor has decided to issue.
///
/// The cursor only decides *what* to fetch; dispatching the request and
/// delivering the outcome back is the owner's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    /// Name-prefix filter this request was issued under, if any. Carried
    /// through to the response so stale results can be recognized.
    pub filter: Option<String>,
}

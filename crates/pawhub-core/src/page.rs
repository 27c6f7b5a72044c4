//! Pagination primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque cursor identifying the next page of a collection.
///
/// The server is the sole authority on page tokens: one is produced by
/// each page response, consumed by the next fetch, and discarded once
/// consumed. The client performs no page arithmetic of its own, so the
/// token's contents (a page number for the reference server, but
/// potentially anything) are never inspected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageToken(String);

impl PageToken {
    /// Create a page token from its server-issued representation.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as the server expects it back.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageToken {
    fn from(page: u64) -> Self {
        Self(page.to_string())
    }
}

/// One page of a listed collection, normalized from the wire envelope.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items in this page, in server order.
    pub items: Vec<T>,

    /// Cursor for the next page; `None` means the collection is
    /// exhausted.
    pub next: Option<PageToken>,

    /// Total item count across all pages, if the server reports one.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// A page with no items and no continuation.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            total: None,
        }
    }

    /// True if this is the final page.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

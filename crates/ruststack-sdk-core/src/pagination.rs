//! Continuation-token contract for paginated results.

use std::fmt;

/// A page that may point at a following page.
///
/// Implemented by every paginated result type; the runtime `Paginator`
/// drives iteration through it.
pub trait PageableResponse {
    /// Continuation token type. Some APIs use a pair of markers.
    type Token: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Token for the next page, or `None` when the service reports no further truncation.
    fn next_token(&self) -> Option<Self::Token>;
}

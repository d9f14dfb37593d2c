//! Typed error for tickmark overlay misuse.
//!
//! The overlay assumes a correctly-sequenced caller (the search feature)
//! that always pairs activation and deactivation and clears before
//! switching views. Breaking that contract is a programming error, not a
//! recoverable runtime condition; it is surfaced as a typed value so unit
//! tests can assert on the failure instead of crashing the process.

use crate::view::ViewId;
use thiserror::Error;

/// Errors produced by [`TrackMarkerOverlay`](crate::overlay::TrackMarkerOverlay).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// An operation arrived in a lifecycle state it is not valid in, e.g.
    /// activating a second view without deactivating the first, or adding a
    /// tickmark for a view the overlay is not bound to.
    #[error(
        "invalid overlay transition: {operation} requested for view {requested:?} while bound to {active:?}"
    )]
    InvalidTransition {
        /// The offending operation.
        operation: &'static str,
        /// View the caller passed in.
        requested: ViewId,
        /// View the overlay is currently bound to, if any.
        active: Option<ViewId>,
    },
}

//! Tickmarks along a scrollbar track.
//!
//! This crate manages small positional indicators ("tickmarks") shown on a
//! scrollbar track to flag locations of interest — search matches, marks,
//! diagnostics — within a scrollable text view. It includes:
//!
//! - Track geometry measurement with platform scrollbar chrome handling
//! - Proportional line → track-pixel mapping
//! - A lifecycle state machine binding the overlay to one view at a time
//! - Debounced re-layout of stored marks across view resizes
//!
//! Measurement and mark instantiation are abstracted behind the
//! [`SurfaceMeasurer`] and [`MarkerRenderer`] capabilities so the geometry
//! and mapping logic is testable without any rendering surface.
//!
//! The overlay is an explicit instance rather than ambient global state:
//! create one [`TrackMarkerOverlay`] per top-level window and drive it from
//! that window's event loop.

pub mod config;
pub mod debounce;
pub mod defaults;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod view;

// Re-export main types for convenience
pub use config::OverlayConfig;
pub use debounce::IdleDebouncer;
pub use error::OverlayError;
pub use geometry::{
    Platform, TrackGeometry, TrackMeasurement, compute_track_geometry, map_line_to_pixel,
};
pub use overlay::TrackMarkerOverlay;
pub use view::{HostView, MarkerRenderer, SurfaceMeasurer, TickPosition, ViewId};

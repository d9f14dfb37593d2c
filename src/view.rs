//! Host-view and rendering-surface capabilities consumed by the overlay.
//!
//! The overlay never touches a concrete UI toolkit. It reads geometry
//! through [`SurfaceMeasurer`], identifies views through [`HostView`], and
//! instantiates marks through [`MarkerRenderer`]; production code adapts
//! these to whatever surface the view renders into.

use crate::geometry::TrackMeasurement;

/// Opaque identity of a host view.
///
/// The overlay does not own the view's lifetime; it records which view it
/// is currently bound to by id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// A text position within the scrollable content.
///
/// Only `line` participates in track mapping; `ch` rides along as opaque
/// payload for consumers that jump to the marked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPosition {
    /// Ordinal content line, the numerator of the proportional mapping.
    pub line: usize,
    /// Character offset within the line.
    pub ch: usize,
}

/// The scrollable text view the overlay is shown for.
pub trait HostView {
    /// Stable identity of this view.
    fn view_id(&self) -> ViewId;

    /// Total number of content lines. Queried fresh at every mapping, never
    /// cached by the overlay.
    fn line_count(&self) -> usize;

    /// Whether this view shows only a subset of a larger document. Subset
    /// views never get tickmarks.
    fn is_subset(&self) -> bool;
}

/// Measures the scrollable surface the view renders into.
pub trait SurfaceMeasurer {
    /// Measure the current scrollbar and content heights.
    fn measure_track(&self) -> TrackMeasurement;
}

/// Instantiates and removes the visual tickmarks.
///
/// The overlay drives this purely in pixel offsets; how a mark is realised
/// (DOM node, GPU quad, terminal cell) is the renderer's business.
pub trait MarkerRenderer {
    /// Create the (empty) tickmark track in the view's UI.
    fn mount(&mut self);

    /// Remove the tickmark track and everything in it.
    fn unmount(&mut self);

    /// Render one tickmark with its top edge at `top_px`.
    fn render_mark(&mut self, top_px: i32);

    /// Remove all rendered tickmarks, leaving the track mounted.
    fn clear_marks(&mut self);
}

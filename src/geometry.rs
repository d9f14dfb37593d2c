//! Scrollbar track geometry and proportional position mapping.
//!
//! Pure measurement math: no rendering surface is touched here. The
//! lifecycle code in [`crate::overlay`] feeds measurements in and renders
//! the resulting pixel offsets out through its renderer capability.

use serde::{Deserialize, Serialize};

/// Height (and width) of a scrollbar up/down arrow button on Windows, in
/// pixels. The up arrow pushes the usable track down by this amount and the
/// down arrow shortens it by the same amount again.
pub const WIN_ARROW_HEIGHT_PX: f32 = 17.0;

/// Downward shift subtracted from every mapped offset so a tickmark of
/// nonzero rendered height sits centered on the ideal position rather than
/// aligning its top edge to it.
const TICKMARK_CENTER_SHIFT_PX: i32 = 1;

/// Host platform, as far as scrollbar chrome is concerned.
///
/// Only Windows reserves arrow-button space at both ends of the scrollbar;
/// the other platforms draw the track edge to edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Platform the crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Pixels reserved for a scrollbar arrow button at each end of the
    /// track on this platform.
    pub fn arrow_button_px(self) -> f32 {
        match self {
            Platform::Windows => WIN_ARROW_HEIGHT_PX,
            Platform::MacOs | Platform::Linux => 0.0,
        }
    }
}

/// Raw pixel measurements of the scrollable surface, taken by a
/// [`SurfaceMeasurer`](crate::view::SurfaceMeasurer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMeasurement {
    /// Rendered height of the vertical scrollbar; 0.0 when no scrollbar is
    /// rendered (content fits without scrolling).
    pub scrollbar_height: f32,
    /// Height of the full content area, used as the fallback track span
    /// when no scrollbar exists.
    pub content_height: f32,
}

/// Usable scrollbar track area, derived fresh from a [`TrackMeasurement`]
/// and never incrementally updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Pixel offset from the top of the scrollbar chrome to the start of
    /// the usable track.
    pub offset: f32,
    /// Pixel height of the usable track.
    pub height: f32,
}

/// Derive the usable track area from a surface measurement.
///
/// With a visible scrollbar the track is the scrollbar minus any
/// arrow-button chrome at both ends. Without one, marks map across the
/// entire visible content span instead.
pub fn compute_track_geometry(
    measurement: &TrackMeasurement,
    platform: Platform,
) -> TrackGeometry {
    if measurement.scrollbar_height > 0.0 {
        let offset = platform.arrow_button_px();
        TrackGeometry {
            offset,
            height: measurement.scrollbar_height - 2.0 * offset,
        }
    } else {
        TrackGeometry {
            offset: 0.0,
            height: measurement.content_height,
        }
    }
}

/// Map a content line to the pixel offset of its tickmark's top edge.
///
/// `total_lines` must be the view's line count at the time of the call; a
/// stale count produces visibly wrong alignment. Callers must guarantee at
/// least one content line exists.
pub fn map_line_to_pixel(line: usize, geometry: TrackGeometry, total_lines: usize) -> i32 {
    debug_assert!(total_lines > 0, "mapping requires at least one content line");
    let top = (line as f32 / total_lines as f32 * geometry.height).round() + geometry.offset;
    top as i32 - TICKMARK_CENTER_SHIFT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_button_inset_only_on_windows() {
        assert_eq!(Platform::Windows.arrow_button_px(), WIN_ARROW_HEIGHT_PX);
        assert_eq!(Platform::MacOs.arrow_button_px(), 0.0);
        assert_eq!(Platform::Linux.arrow_button_px(), 0.0);
    }

    #[test]
    fn test_geometry_with_visible_scrollbar() {
        let m = TrackMeasurement {
            scrollbar_height: 300.0,
            content_height: 5000.0,
        };

        let win = compute_track_geometry(&m, Platform::Windows);
        assert_eq!(win.offset, 17.0);
        assert_eq!(win.height, 266.0);

        let mac = compute_track_geometry(&m, Platform::MacOs);
        assert_eq!(mac.offset, 0.0);
        assert_eq!(mac.height, 300.0);
    }

    #[test]
    fn test_geometry_falls_back_to_content_height() {
        let m = TrackMeasurement {
            scrollbar_height: 0.0,
            content_height: 500.0,
        };

        // No scrollbar: full content span, no chrome inset even on Windows
        let geometry = compute_track_geometry(&m, Platform::Windows);
        assert_eq!(geometry.offset, 0.0);
        assert_eq!(geometry.height, 500.0);
    }

    #[test]
    fn test_map_line_midpoint() {
        let geometry = TrackGeometry {
            offset: 0.0,
            height: 500.0,
        };
        assert_eq!(map_line_to_pixel(50, geometry, 100), 249);
    }

    #[test]
    fn test_map_line_zero_lands_on_track_start() {
        let geometry = TrackGeometry {
            offset: 17.0,
            height: 266.0,
        };
        assert_eq!(map_line_to_pixel(0, geometry, 100), 16);
    }

    #[test]
    fn test_map_line_last_lands_on_track_end() {
        let geometry = TrackGeometry {
            offset: 17.0,
            height: 266.0,
        };
        assert_eq!(map_line_to_pixel(100, geometry, 100), 266 + 17 - 1);
    }
}

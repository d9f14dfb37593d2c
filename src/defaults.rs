//! Default values for overlay configuration fields.

use crate::geometry::Platform;

/// Resize quiescence window, in milliseconds, before stored marks are
/// re-laid out.
pub fn resize_idle_ms() -> u64 {
    300
}

/// Platform detected at compile time.
pub fn platform() -> Platform {
    Platform::current()
}

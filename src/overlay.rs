//! Lifecycle state machine for the tickmark overlay.
//!
//! Manages tickmarks shown along the scrollbar track for one active view at
//! a time. Callers are expected to `clear()` and hide the overlay before
//! switching views; operating on a view the overlay is not bound to returns
//! [`OverlayError::InvalidTransition`].

use std::time::Instant;

use crate::config::OverlayConfig;
use crate::debounce::IdleDebouncer;
use crate::error::OverlayError;
use crate::geometry::{TrackGeometry, compute_track_geometry, map_line_to_pixel};
use crate::view::{HostView, MarkerRenderer, SurfaceMeasurer, TickPosition, ViewId};

/// State that exists only while the overlay is bound to a view.
#[derive(Debug)]
struct ActiveOverlay {
    view: ViewId,
    geometry: TrackGeometry,
}

/// One stored mark: the position the caller supplied and the pixel offset
/// it was last rendered at (kept for hit-testing).
#[derive(Debug, Clone)]
struct RenderedMark {
    pos: TickPosition,
    top_px: i32,
}

/// Tickmark overlay bound to at most one scrollable view.
///
/// Create one instance per top-level window and drive it from that window's
/// event loop: forward resize events through
/// [`notify_resize`](Self::notify_resize) and call
/// [`poll_resize`](Self::poll_resize) once per loop turn so the debounced
/// re-layout can run.
pub struct TrackMarkerOverlay<R: MarkerRenderer> {
    renderer: R,
    config: OverlayConfig,
    active: Option<ActiveOverlay>,
    marks: Vec<RenderedMark>,
    resize_debounce: IdleDebouncer,
}

impl<R: MarkerRenderer> TrackMarkerOverlay<R> {
    /// Create an inactive overlay that renders through `renderer`.
    pub fn new(renderer: R, config: OverlayConfig) -> Self {
        let resize_debounce = IdleDebouncer::new(config.resize_idle());
        Self {
            renderer,
            config,
            active: None,
            marks: Vec::new(),
            resize_debounce,
        }
    }

    /// Whether the overlay is currently bound to a view.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// View the overlay is currently bound to, if any.
    pub fn active_view(&self) -> Option<ViewId> {
        self.active.as_ref().map(|a| a.view)
    }

    /// Number of marks currently stored.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Current track geometry, if active.
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.active.as_ref().map(|a| a.geometry)
    }

    /// Add or remove the tickmark track from the view's UI.
    ///
    /// Activation on a subset view is a silent no-op: the overlay stays
    /// inactive and nothing is mounted. Re-activating the already-active
    /// view is idempotent. Every other mismatch between `visible` and the
    /// current state is a caller contract violation.
    pub fn set_visible<V>(&mut self, view: &V, visible: bool) -> Result<(), OverlayError>
    where
        V: HostView + SurfaceMeasurer,
    {
        let requested = view.view_id();
        let bound = self.active.as_ref().map(|a| a.view);

        if visible {
            match bound {
                Some(active) if active == requested => Ok(()),
                Some(active) => Err(OverlayError::InvalidTransition {
                    operation: "set_visible(true)",
                    requested,
                    active: Some(active),
                }),
                None => {
                    // Subset views never get tickmarks (search inside them
                    // is not supported).
                    if view.is_subset() {
                        log::debug!("tickmark track skipped for subset view {requested:?}");
                        return Ok(());
                    }

                    self.renderer.mount();
                    let geometry =
                        compute_track_geometry(&view.measure_track(), self.config.platform);
                    log::debug!("tickmark track shown for view {requested:?}: {geometry:?}");
                    self.active = Some(ActiveOverlay {
                        view: requested,
                        geometry,
                    });
                    Ok(())
                }
            }
        } else {
            match bound {
                Some(active) if active == requested => {
                    log::debug!("tickmark track removed from view {requested:?}");
                    self.renderer.unmount();
                    // A debounce still in flight must not re-render against
                    // a view the overlay no longer tracks.
                    self.resize_debounce.cancel();
                    self.active = None;
                    self.marks.clear();
                    Ok(())
                }
                other => Err(OverlayError::InvalidTransition {
                    operation: "set_visible(false)",
                    requested,
                    active: other,
                }),
            }
        }
    }

    /// Clear any marks in the track but leave it visible. Safe to call when
    /// the overlay is not active.
    pub fn clear(&mut self) {
        if self.active.is_some() {
            self.renderer.clear_marks();
            self.marks.clear();
        }
    }

    /// Add one tickmark, rendered immediately with the current geometry and
    /// the view's current line count. Does not recompute geometry.
    pub fn add_tickmark<V: HostView>(
        &mut self,
        view: &V,
        pos: TickPosition,
    ) -> Result<(), OverlayError> {
        let requested = view.view_id();
        let geometry = match &self.active {
            Some(active) if active.view == requested => active.geometry,
            other => {
                return Err(OverlayError::InvalidTransition {
                    operation: "add_tickmark",
                    requested,
                    active: other.as_ref().map(|a| a.view),
                });
            }
        };

        let top_px = map_line_to_pixel(pos.line, geometry, view.line_count());
        log::trace!("tickmark at line {} rendered at {top_px} px", pos.line);
        self.renderer.render_mark(top_px);
        self.marks.push(RenderedMark { pos, top_px });
        Ok(())
    }

    /// Note a resize of the view's surface.
    ///
    /// Re-layout is deferred until resizes have been quiet for the
    /// configured idle window; each call replaces any pending deadline.
    /// Ignored while inactive.
    pub fn notify_resize(&mut self, now: Instant) {
        if self.active.is_some() {
            self.resize_debounce.schedule(now);
        }
    }

    /// Drive the debounced resize re-layout; call once per event-loop turn.
    ///
    /// When the idle deadline has elapsed and at least one mark is stored,
    /// the track is re-measured and every stored mark re-rendered from
    /// scratch. With zero marks the deadline is consumed without any
    /// measurement or rendering work. Returns `true` when marks were
    /// re-rendered.
    pub fn poll_resize<V>(&mut self, view: &V, now: Instant) -> Result<bool, OverlayError>
    where
        V: HostView + SurfaceMeasurer,
    {
        let bound = match &self.active {
            Some(active) => active.view,
            // Deactivation cancelled any pending deadline.
            None => return Ok(false),
        };

        let requested = view.view_id();
        if bound != requested {
            return Err(OverlayError::InvalidTransition {
                operation: "poll_resize",
                requested,
                active: Some(bound),
            });
        }

        if !self.resize_debounce.fire(now) {
            return Ok(false);
        }

        if self.marks.is_empty() {
            return Ok(false);
        }

        let geometry = compute_track_geometry(&view.measure_track(), self.config.platform);
        if let Some(active) = &mut self.active {
            active.geometry = geometry;
        }
        log::debug!(
            "re-laying out {} tickmarks for view {requested:?}: {geometry:?}",
            self.marks.len()
        );

        self.renderer.clear_marks();
        let total_lines = view.line_count();
        for mark in &mut self.marks {
            mark.top_px = map_line_to_pixel(mark.pos.line, geometry, total_lines);
            self.renderer.render_mark(mark.top_px);
        }
        Ok(true)
    }

    /// Find the stored mark rendered nearest to `y_px`, within `tolerance`
    /// pixels. Useful for hit-testing clicks or hovers on the track.
    pub fn mark_at(&self, y_px: i32, tolerance: i32) -> Option<&TickPosition> {
        let mut closest: Option<(i32, &RenderedMark)> = None;
        for mark in &self.marks {
            let distance = (mark.top_px - y_px).abs();
            if distance <= tolerance {
                match closest {
                    Some((best, _)) if distance >= best => {}
                    _ => closest = Some((distance, mark)),
                }
            }
        }
        closest.map(|(_, mark)| &mark.pos)
    }
}

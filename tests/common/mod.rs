//! Shared test doubles for the integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use track_marks::{
    HostView, MarkerRenderer, SurfaceMeasurer, TrackMeasurement, ViewId,
};

/// A fake scrollable view with directly settable measurements.
pub struct FakeView {
    pub id: ViewId,
    pub lines: usize,
    pub subset: bool,
    pub scrollbar_height: f32,
    pub content_height: f32,
}

impl FakeView {
    /// A non-subset view with no rendered scrollbar and 500 px of content.
    pub fn new(id: u64, lines: usize) -> Self {
        Self {
            id: ViewId(id),
            lines,
            subset: false,
            scrollbar_height: 0.0,
            content_height: 500.0,
        }
    }
}

impl HostView for FakeView {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn line_count(&self) -> usize {
        self.lines
    }

    fn is_subset(&self) -> bool {
        self.subset
    }
}

impl SurfaceMeasurer for FakeView {
    fn measure_track(&self) -> TrackMeasurement {
        TrackMeasurement {
            scrollbar_height: self.scrollbar_height,
            content_height: self.content_height,
        }
    }
}

/// Everything a [`RecordingRenderer`] has been asked to do.
#[derive(Debug, Default)]
pub struct RenderLog {
    pub mounted: bool,
    pub mounts: usize,
    pub unmounts: usize,
    pub clears: usize,
    /// Pixel offsets of the marks currently on screen.
    pub marks: Vec<i32>,
}

/// Renderer double that records calls into a shared [`RenderLog`].
#[derive(Default)]
pub struct RecordingRenderer {
    log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    /// Create a renderer and a handle to its log for later inspection.
    pub fn new() -> (Self, Rc<RefCell<RenderLog>>) {
        let log = Rc::new(RefCell::new(RenderLog::default()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl MarkerRenderer for RecordingRenderer {
    fn mount(&mut self) {
        let mut log = self.log.borrow_mut();
        log.mounted = true;
        log.mounts += 1;
    }

    fn unmount(&mut self) {
        let mut log = self.log.borrow_mut();
        log.mounted = false;
        log.unmounts += 1;
        log.marks.clear();
    }

    fn render_mark(&mut self, top_px: i32) {
        self.log.borrow_mut().marks.push(top_px);
    }

    fn clear_marks(&mut self) {
        let mut log = self.log.borrow_mut();
        log.clears += 1;
        log.marks.clear();
    }
}

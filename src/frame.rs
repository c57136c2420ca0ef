use glam::Vec3;
use sector_core::{
    ChildContainer, ChildId, HostMode, LayoutConfig, LayoutEngine, LayoutError, LayoutOutcome,
    ReferencePoints,
};
use smallvec::SmallVec;

/// What the driver last saw of the inputs that affect layout.
#[derive(Clone, Debug, PartialEq)]
struct SceneFingerprint {
    references: [Option<Vec3>; 3],
    children: SmallVec<[ChildId; 16]>,
}

impl SceneFingerprint {
    fn capture<C: ChildContainer + ?Sized>(engine: &LayoutEngine, container: &C) -> Self {
        let refs = engine.references();
        let position =
            |id: Option<ChildId>| id.and_then(|id| container.slot(id)).map(|s| s.pose.position);
        Self {
            references: [position(refs.center), position(refs.start), position(refs.end)],
            children: engine.target_children(container).map(|c| c.id).collect(),
        }
    }
}

/// Result of one [`SectorDriver::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Outcome of the layout pass, if one ran this frame.
    pub layout: Option<Result<LayoutOutcome, LayoutError>>,
    /// Transitions dropped because their child left the container.
    pub cancelled: usize,
    /// Transitions that reached their target this frame.
    pub completed: usize,
    /// Transitions still running after this frame.
    pub animating: usize,
}

/// Polls a container once per tick and keeps its sector laid out.
///
/// Any number of changes between two frames cost at most one recompute.
pub struct SectorDriver {
    engine: LayoutEngine,
    last_seen: Option<SceneFingerprint>,
    pending: bool,
    frames: u64,
}

impl SectorDriver {
    pub fn new(config: LayoutConfig, references: ReferencePoints) -> Self {
        Self {
            engine: LayoutEngine::new(config, references),
            last_seen: None,
            pending: false,
            frames: 0,
        }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LayoutEngine {
        &mut self.engine
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Forces a layout pass on the next frame even if nothing changed.
    pub fn request_layout(&mut self) {
        self.pending = true;
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.engine.set_config(config);
        self.pending = true;
    }

    pub fn set_references(&mut self, references: ReferencePoints) {
        self.engine.set_references(references);
        self.pending = true;
    }

    pub fn set_editing(&mut self, editing: bool) {
        let mode = if editing {
            HostMode::Editing
        } else {
            HostMode::Live
        };
        self.engine.transitions_mut().set_mode(mode);
    }

    pub fn frame<C: ChildContainer + ?Sized>(&mut self, container: &mut C) -> FrameReport {
        self.frames += 1;
        let mut report = FrameReport {
            cancelled: self.engine.transitions_mut().retain_present(&*container),
            ..FrameReport::default()
        };

        let seen = SceneFingerprint::capture(&self.engine, &*container);
        let layout = match &self.last_seen {
            Some(last) if last.references != seen.references => {
                Some(self.engine.notify_reference_point_moved(container))
            }
            Some(last) if last.children != seen.children => {
                Some(self.engine.notify_child_count_changed(container))
            }
            Some(_) if !self.pending => None,
            _ => Some(self.engine.request(container)),
        };
        if layout.is_some() {
            self.last_seen = Some(seen);
            self.pending = false;
        }
        report.layout = layout;

        report.completed = self.engine.tick(container);
        report.animating = self.engine.transitions().active_count();
        if report.layout.is_some() || report.completed > 0 {
            log::debug!(
                "[frame {}] layout={:?} completed={} animating={}",
                self.frames,
                report.layout,
                report.completed,
                report.animating
            );
        }
        report
    }
}

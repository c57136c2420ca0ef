use crate::config::LayoutConfig;
use crate::error::{LayoutError, ReferenceRole};
use crate::orientation::resolve;
use crate::sampler::{ArcSpec, ReferenceFrame};
use crate::state::{ChildContainer, ChildId, ChildSlot, LayoutTarget, Pose, ReferencePoints};
use crate::transition::TransitionController;
use async_channel::Receiver;
use glam::Quat;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutState {
    Idle,
    Computing,
    Applied,
    Faulted,
}

/// What a successful pass did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// No non-reference children; nothing touched.
    Empty,
    /// `freeze` was set; rotations of this many children reset to identity.
    Frozen(usize),
    /// This many children received arc targets.
    Laid(usize),
}

type Slots = SmallVec<[ChildSlot; 16]>;

pub struct LayoutEngine {
    config: LayoutConfig,
    references: ReferencePoints,
    transitions: TransitionController,
    state: LayoutState,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, references: ReferencePoints) -> Self {
        Self {
            transitions: TransitionController::new(config.animation),
            config,
            references,
            state: LayoutState::Idle,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.transitions.set_settings(config.animation);
        self.config = config;
    }

    pub fn references(&self) -> &ReferencePoints {
        &self.references
    }

    pub fn set_references(&mut self, references: ReferencePoints) {
        self.references = references;
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    pub fn transitions_mut(&mut self) -> &mut TransitionController {
        &mut self.transitions
    }

    pub fn notify_child_count_changed<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
    ) -> Result<LayoutOutcome, LayoutError> {
        self.recompute(container)
    }

    pub fn notify_reference_point_moved<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
    ) -> Result<LayoutOutcome, LayoutError> {
        self.recompute(container)
    }

    pub fn request<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
    ) -> Result<LayoutOutcome, LayoutError> {
        self.recompute(container)
    }

    /// Runs one all-or-nothing layout pass. On error no child is touched.
    pub fn recompute<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
    ) -> Result<LayoutOutcome, LayoutError> {
        self.state = LayoutState::Computing;
        let result = self.run_pass(container);
        self.state = match &result {
            Ok(_) => LayoutState::Applied,
            Err(e) => {
                log::error!("layout pass faulted: {e}");
                LayoutState::Faulted
            }
        };
        result
    }

    /// Active children that are laid out, in container order.
    ///
    /// Fresh on every call; reference children are excluded by identity.
    pub fn target_children<'a, C: ChildContainer + ?Sized>(
        &self,
        container: &'a C,
    ) -> impl Iterator<Item = ChildSlot> + 'a {
        let references = self.references;
        container
            .children()
            .filter(move |c| c.active && !references.contains(c.id))
    }

    pub fn reference_frame<C: ChildContainer + ?Sized>(
        &self,
        container: &C,
    ) -> Result<ReferenceFrame, LayoutError> {
        let position = |id: Option<ChildId>, role: ReferenceRole| {
            id.and_then(|id| container.slot(id))
                .map(|slot| slot.pose.position)
                .ok_or(LayoutError::ConfigurationMissing(role))
        };
        Ok(ReferenceFrame {
            center: position(self.references.center, ReferenceRole::Center)?,
            start: position(self.references.start, ReferenceRole::Start)?,
            end: position(self.references.end, ReferenceRole::End)?,
        })
    }

    /// Targets the next pass would submit, without applying anything.
    /// Ignores `freeze`.
    pub fn compute_targets<C: ChildContainer + ?Sized>(
        &self,
        container: &C,
    ) -> Result<Vec<LayoutTarget>, LayoutError> {
        let frame = self.reference_frame(container)?;
        let children: Slots = self.target_children(container).collect();
        if children.is_empty() {
            return Ok(Vec::new());
        }
        self.layout(&frame, &children)
    }

    pub fn tick<C: ChildContainer + ?Sized>(&mut self, container: &mut C) -> usize {
        self.transitions.tick(container)
    }

    pub fn subscribe(&mut self) -> Receiver<ChildId> {
        self.transitions.subscribe()
    }

    fn run_pass<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
    ) -> Result<LayoutOutcome, LayoutError> {
        let frame = self.reference_frame(&*container)?;
        let children: Slots = self.target_children(&*container).collect();
        if children.is_empty() {
            return Ok(LayoutOutcome::Empty);
        }

        if self.config.freeze {
            for slot in &children {
                let pose = Pose::new(slot.pose.position, Quat::IDENTITY);
                self.transitions.apply_now(container, slot.id, pose);
            }
            return Ok(LayoutOutcome::Frozen(children.len()));
        }

        let targets = self.layout(&frame, &children)?;
        for (slot, target) in children.iter().zip(&targets) {
            self.transitions
                .submit(container, target.id, slot.pose, target.pose);
            log::debug!("target {:?} -> {:?}", target.id, target.pose.position);
        }
        Ok(LayoutOutcome::Laid(targets.len()))
    }

    fn layout(
        &self,
        frame: &ReferenceFrame,
        children: &[ChildSlot],
    ) -> Result<Vec<LayoutTarget>, LayoutError> {
        let arc = ArcSpec::from_frame(frame)?;
        let positions = arc.sample(children.len());

        let targets = children
            .iter()
            .zip(positions)
            .map(|(slot, position)| {
                let look_at = self.config.policy.look_target(position, &arc)?;
                let rotation = resolve(
                    position,
                    look_at,
                    self.config.head_direction,
                    self.config.rotation_offset,
                )?;
                Ok(LayoutTarget {
                    id: slot.id,
                    pose: Pose::new(position, rotation),
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        if self.config.debug {
            log::info!(
                "[sector] center=({:.3},{:.3},{:.3}) radius={:.3} start=({:.3},{:.3}) end=({:.3},{:.3}) children={}",
                arc.center.x, arc.center.y, arc.center.z,
                arc.radius,
                arc.start.theta, arc.start.phi,
                arc.end.theta, arc.end.phi,
                targets.len()
            );
            for (i, t) in targets.iter().enumerate() {
                log::info!(
                    "[sector] #{i} {:?} pos=({:.3},{:.3},{:.3})",
                    t.id, t.pose.position.x, t.pose.position.y, t.pose.position.z
                );
            }
        }
        Ok(targets)
    }
}

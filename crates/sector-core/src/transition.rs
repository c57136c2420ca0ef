//! Per-child pose interpolation driven by an external tick source.
//!
//! Each child owns at most one [`Transition`], keyed by [`ChildId`]. A new
//! target for a child replaces its in-flight transition outright; the new one
//! starts from whatever pose the child holds at that moment.

use crate::config::{AnimationSettings, HostMode, Interpolation};
use crate::constants::GEOMETRY_EPSILON;
use crate::state::{ChildContainer, ChildId, Pose};
use async_channel::{Receiver, Sender};
use fnv::{FnvHashMap, FnvHashSet};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    /// Steps emitted so far, `0..=frame_count`.
    pub step: u32,
    pub frame_count: u32,
    pub frame_interval: u32,
    wait: u32,
}

impl Transition {
    fn new(from: Pose, to: Pose, settings: &AnimationSettings) -> Self {
        Self {
            from,
            to,
            step: 0,
            frame_count: settings.frame_count,
            frame_interval: settings.frame_interval,
            wait: settings.frame_interval,
        }
    }

    /// Advances one tick. Returns the pose to write when a step is due and
    /// whether it was the final one.
    fn advance(&mut self, interpolation: Interpolation) -> Option<(Pose, bool)> {
        self.wait = self.wait.saturating_sub(1);
        if self.wait > 0 {
            return None;
        }
        self.wait = self.frame_interval;
        self.step += 1;
        if self.step >= self.frame_count {
            // exact target on the last step, no accumulated drift
            return Some((self.to, true));
        }
        let t = self.step as f32 / self.frame_count as f32;
        Some((interpolate(&self.from, &self.to, t, interpolation), false))
    }
}

pub fn interpolate(from: &Pose, to: &Pose, t: f32, interpolation: Interpolation) -> Pose {
    let t = t.clamp(0.0, 1.0);
    match interpolation {
        Interpolation::Linear => Pose::new(
            from.position.lerp(to.position, t),
            from.rotation.lerp(to.rotation, t),
        ),
        Interpolation::Spherical => Pose::new(
            slerp_vec3(from.position, to.position, t),
            from.rotation.slerp(to.rotation, t),
        ),
    }
}

/// Spherical interpolation of two vectors about the origin: the direction
/// rotates at constant angular speed while the length is interpolated linearly.
pub fn slerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let (len_a, len_b) = (a.length(), b.length());
    if len_a <= GEOMETRY_EPSILON || len_b <= GEOMETRY_EPSILON {
        return a.lerp(b, t);
    }
    let (dir_a, dir_b) = (a / len_a, b / len_b);
    let angle = dir_a.angle_between(dir_b);
    if angle <= GEOMETRY_EPSILON {
        return a.lerp(b, t);
    }
    let mut axis = dir_a.cross(dir_b);
    if axis.length() <= GEOMETRY_EPSILON {
        // opposite directions: any perpendicular axis works
        axis = dir_a.any_orthonormal_vector();
    }
    let dir = Quat::from_axis_angle(axis.normalize(), angle * t) * dir_a;
    dir * (len_a + (len_b - len_a) * t)
}

pub struct TransitionController {
    settings: AnimationSettings,
    mode: HostMode,
    active: FnvHashMap<ChildId, Transition>,
    subscribers: Vec<Sender<ChildId>>,
}

impl TransitionController {
    pub fn new(settings: AnimationSettings) -> Self {
        warn_if_invalid(&settings);
        Self {
            settings,
            mode: HostMode::Live,
            active: FnvHashMap::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Replaces the settings. In-flight transitions keep the timing they started with.
    pub fn set_settings(&mut self, settings: AnimationSettings) {
        warn_if_invalid(&settings);
        self.settings = settings;
    }

    pub fn mode(&self) -> HostMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: HostMode) {
        self.mode = mode;
    }

    fn animates(&self) -> bool {
        self.mode == HostMode::Live && self.settings.is_effective()
    }

    /// Moves `id` towards `target`, either at once or over the configured frames.
    pub fn submit<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
        id: ChildId,
        current: Pose,
        target: Pose,
    ) {
        if !self.animates() || current == target {
            self.apply_now(container, id, target);
            return;
        }
        let transition = Transition::new(current, target, &self.settings);
        if self.active.insert(id, transition).is_some() {
            log::trace!("transition for {:?} superseded", id);
        }
    }

    /// Cancels any transition for `id` and writes `pose` straight away.
    pub fn apply_now<C: ChildContainer + ?Sized>(
        &mut self,
        container: &mut C,
        id: ChildId,
        pose: Pose,
    ) {
        self.active.remove(&id);
        if container.set_pose(id, pose) {
            self.notify(id);
        }
    }

    /// Advances every transition by one tick. Returns how many completed.
    pub fn tick<C: ChildContainer + ?Sized>(&mut self, container: &mut C) -> usize {
        let interpolation = self.settings.interpolation;
        let mut finished: SmallVec<[ChildId; 8]> = SmallVec::new();
        let mut lost: SmallVec<[ChildId; 4]> = SmallVec::new();

        for (id, transition) in self.active.iter_mut() {
            let Some((pose, done)) = transition.advance(interpolation) else {
                continue;
            };
            if !container.set_pose(*id, pose) {
                lost.push(*id);
            } else if done {
                finished.push(*id);
            }
        }

        for id in &lost {
            self.active.remove(id);
            log::debug!("child {:?} vanished mid-transition, cancelled", id);
        }
        for &id in &finished {
            self.active.remove(&id);
            self.notify(id);
        }
        finished.len()
    }

    pub fn cancel(&mut self, id: ChildId) -> bool {
        self.active.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.active.clear();
    }

    /// Drops transitions whose child is no longer in `container`.
    pub fn retain_present<C: ChildContainer + ?Sized>(&mut self, container: &C) -> usize {
        if self.active.is_empty() {
            return 0;
        }
        let present: FnvHashSet<ChildId> = container.children().map(|c| c.id).collect();
        let before = self.active.len();
        self.active.retain(|id, _| present.contains(id));
        before - self.active.len()
    }

    pub fn is_animating(&self, id: ChildId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn transition(&self, id: ChildId) -> Option<&Transition> {
        self.active.get(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Receives the id of every child whose final pose has been committed.
    pub fn subscribe(&mut self) -> Receiver<ChildId> {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, id: ChildId) {
        self.subscribers.retain(|tx| tx.try_send(id).is_ok());
    }
}

fn warn_if_invalid(settings: &AnimationSettings) {
    if settings.enabled && !settings.is_valid() {
        log::warn!(
            "animation frame_count={} frame_interval={} is not usable, applying poses immediately",
            settings.frame_count,
            settings.frame_interval
        );
    }
}

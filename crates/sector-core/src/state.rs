//! Host-facing state types shared with the driver crates.
//!
//! These types avoid referencing any particular scene graph. A host exposes
//! its children through [`ChildContainer`] and receives poses back through
//! the same trait.

use glam::{Quat, Vec3};

/// Stable identity of a child inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(pub u64);

/// Local position and rotation of a child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Snapshot of one child as enumerated from the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildSlot {
    pub id: ChildId,
    pub active: bool,
    pub pose: Pose,
}

/// Ordered, mutable view of a parent's children.
///
/// Enumeration order must be stable between calls: it decides which arc
/// bucket each child receives.
pub trait ChildContainer {
    fn children(&self) -> Box<dyn Iterator<Item = ChildSlot> + '_>;

    fn slot(&self, id: ChildId) -> Option<ChildSlot> {
        self.children().find(|c| c.id == id)
    }

    /// Writes a pose; returns `false` when the child no longer exists.
    fn set_pose(&mut self, id: ChildId, pose: Pose) -> bool;
}

/// Handles of the three reference children that define the sector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReferencePoints {
    pub center: Option<ChildId>,
    pub start: Option<ChildId>,
    pub end: Option<ChildId>,
}

impl ReferencePoints {
    pub fn new(center: ChildId, start: ChildId, end: ChildId) -> Self {
        Self {
            center: Some(center),
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, id: ChildId) -> bool {
        [self.center, self.start, self.end].contains(&Some(id))
    }
}

/// Pose a child should end up in after a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutTarget {
    pub id: ChildId,
    pub pose: Pose,
}

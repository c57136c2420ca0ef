use glam::Vec3;
use sector_core::{ChildContainer, ChildId, ChildSlot, Pose};

/// One child of the scene's single parent.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: ChildId,
    pub name: String,
    pub active: bool,
    pub pose: Pose,
}

/// Flat, ordered child list of a single parent.
///
/// Ids are never reused, so a removed node can't be confused with a later one.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, position: Vec3) -> ChildId {
        self.next_id += 1;
        let id = ChildId(self.next_id);
        self.nodes.push(SceneNode {
            id,
            name: name.into(),
            active: true,
            pose: Pose::at(position),
        });
        id
    }

    pub fn remove(&mut self, id: ChildId) -> Option<SceneNode> {
        let index = self.index_of(id)?;
        Some(self.nodes.remove(index))
    }

    /// Moves `id` to `index` (clamped to the end), shifting the others.
    pub fn move_to(&mut self, id: ChildId, index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let node = self.nodes.remove(from);
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
        true
    }

    pub fn set_active(&mut self, id: ChildId, active: bool) -> bool {
        self.node_mut(id).map(|n| n.active = active).is_some()
    }

    pub fn set_position(&mut self, id: ChildId, position: Vec3) -> bool {
        self.node_mut(id).map(|n| n.pose.position = position).is_some()
    }

    pub fn node(&self, id: ChildId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn pose(&self, id: ChildId) -> Option<Pose> {
        self.node(id).map(|n| n.pose)
    }

    /// First node called `name`. Layout itself only ever compares ids.
    pub fn find(&self, name: &str) -> Option<ChildId> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn index_of(&self, id: ChildId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn node_mut(&mut self, id: ChildId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }
}

impl ChildContainer for Scene {
    fn children(&self) -> Box<dyn Iterator<Item = ChildSlot> + '_> {
        Box::new(self.nodes.iter().map(|n| ChildSlot {
            id: n.id,
            active: n.active,
            pose: n.pose,
        }))
    }

    fn slot(&self, id: ChildId) -> Option<ChildSlot> {
        self.node(id).map(|n| ChildSlot {
            id: n.id,
            active: n.active,
            pose: n.pose,
        })
    }

    fn set_pose(&mut self, id: ChildId, pose: Pose) -> bool {
        self.node_mut(id).map(|n| n.pose = pose).is_some()
    }
}

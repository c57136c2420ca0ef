// Minimal in-memory container shared by the integration tests.

#![allow(dead_code)]
use glam::Vec3;
use sector_core::{ChildContainer, ChildId, ChildSlot, Pose, ReferencePoints};

#[derive(Default)]
pub struct TestContainer {
    pub nodes: Vec<ChildSlot>,
    next_id: u64,
}

impl TestContainer {
    pub fn add(&mut self, position: Vec3) -> ChildId {
        self.next_id += 1;
        let id = ChildId(self.next_id);
        self.nodes.push(ChildSlot {
            id,
            active: true,
            pose: Pose::at(position),
        });
        id
    }

    pub fn pose(&self, id: ChildId) -> Pose {
        self.slot(id).expect("child exists").pose
    }

    pub fn set_position(&mut self, id: ChildId, position: Vec3) {
        let node = self.nodes.iter_mut().find(|n| n.id == id).unwrap();
        node.pose.position = position;
    }

    pub fn set_active(&mut self, id: ChildId, active: bool) {
        let node = self.nodes.iter_mut().find(|n| n.id == id).unwrap();
        node.active = active;
    }

    pub fn remove(&mut self, id: ChildId) {
        self.nodes.retain(|n| n.id != id);
    }

    pub fn poses(&self) -> Vec<Pose> {
        self.nodes.iter().map(|n| n.pose).collect()
    }
}

impl ChildContainer for TestContainer {
    fn children(&self) -> Box<dyn Iterator<Item = ChildSlot> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn set_pose(&mut self, id: ChildId, pose: Pose) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.pose = pose;
                true
            }
            None => false,
        }
    }
}

/// Container with the three reference children followed by `items` children at the origin.
pub fn sector(
    center: Vec3,
    start: Vec3,
    end: Vec3,
    items: usize,
) -> (TestContainer, ReferencePoints, Vec<ChildId>) {
    let mut c = TestContainer::default();
    let refs = ReferencePoints::new(c.add(center), c.add(start), c.add(end));
    let ids = (0..items).map(|_| c.add(Vec3::ZERO)).collect();
    (c, refs, ids)
}

pub fn approx_vec(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).length() < eps
}

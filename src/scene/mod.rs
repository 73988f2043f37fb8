//! Minimal scene graph holding named transforms.
//!
//! Nodes are addressed by [`NodeId`] handles that are never reused, so a
//! handle held by a consumer (e.g. the camera rig's follow target) acts as
//! a weak reference: once the node is removed every lookup through the
//! stale handle returns `None` instead of aliasing a newer node.

use glam::{EulerRot, Quat, Vec3};
use rustc_hash::FxHashMap;

/// Stable handle to a node in a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Raw numeric id (for logging).
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Position plus heading about the vertical (+Y) axis.
///
/// Characters in this crate only ever yaw, so orientation is a scalar
/// internally; [`Transform::rotation`] produces the full quaternion at the
/// scene boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Heading in radians. `0` faces +Z.
    pub heading: f32,
}

impl Transform {
    /// Transform with an explicit heading.
    #[must_use]
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Build from a full rotation, keeping only the yaw component.
    #[must_use]
    pub fn from_rotation(position: Vec3, rotation: Quat) -> Self {
        let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
        Self {
            position,
            heading: yaw,
        }
    }

    /// Full rotation quaternion for this heading.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }

    /// Unit vector the node is facing (on the ground plane).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

/// A named node in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Human-readable name (e.g. `"character"`).
    pub name: String,
    /// Current transform.
    pub transform: Transform,
}

/// Flat collection of transform nodes.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: FxHashMap<NodeId, SceneNode>,
    next_id: u64,
}

impl SceneGraph {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and return its handle.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
    ) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let _ = self.nodes.insert(
            id,
            SceneNode {
                name: name.into(),
                transform,
            },
        );
        id
    }

    /// Remove a node. Outstanding handles become dangling and resolve to
    /// `None` from then on.
    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(&id)
    }

    /// Whether the handle still refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Read a node's transform.
    #[must_use]
    pub fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.nodes.get(&id).map(|n| &n.transform)
    }

    /// Overwrite a node's transform. Returns `false` if the node is gone.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.transform = transform;
                true
            }
            None => false,
        }
    }

    /// Find the first node with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.name == name)
            .map(|(id, _)| *id)
            .min()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn removed_handles_resolve_to_none() {
        let mut scene = SceneGraph::new();
        let a = scene.insert("character", Transform::default());
        assert!(scene.contains(a));
        assert!(scene.remove(a).is_some());
        assert!(scene.transform(a).is_none());

        // A fresh node never reuses the old id.
        let b = scene.insert("character", Transform::default());
        assert_ne!(a, b);
        assert!(scene.transform(a).is_none());
        assert!(!scene.set_transform(a, Transform::default()));
    }

    #[test]
    fn forward_follows_heading() {
        let t = Transform::new(Vec3::ZERO, FRAC_PI_2);
        let f = t.forward();
        assert!((f - Vec3::X).length() < 1e-6);
        assert!((t.rotation() * Vec3::Z - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn heading_survives_quaternion_round_trip() {
        let q = Quat::from_rotation_y(-2.5);
        let t = Transform::from_rotation(Vec3::ONE, q);
        assert!((t.heading + 2.5).abs() < 1e-5);
    }

    #[test]
    fn find_by_name_returns_oldest_match() {
        let mut scene = SceneGraph::new();
        let first = scene.insert("crate", Transform::default());
        let _ = scene.insert("crate", Transform::default());
        assert_eq!(scene.find_by_name("crate"), Some(first));
        assert_eq!(scene.find_by_name("robot"), None);
        assert_eq!(scene.len(), 2);
    }
}

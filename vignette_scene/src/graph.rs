// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits over the host's scene graph.
//!
//! The session mutates the scene only through [`StageGraph`] and queries
//! manipulation state only through [`Manipulator`]. Implementations are not
//! required to be thread-safe: every call happens on the single thread that
//! owns the scene.

use nalgebra::{Point3, UnitQuaternion, Vector3};

use crate::types::{Aabb, Pose};

/// A loaded, drawable 3D asset.
///
/// The one capability the session needs from it is the bounding-box query
/// used to position the overlay control above the model.
pub trait ModelRenderable {
    /// Axis-aligned bounds of the loaded asset in its local space, if the
    /// asset exposes them.
    fn bounding_box(&self) -> Option<Aabb>;
}

/// The scene graph as the placement session sees it.
///
/// Implementations supply a copyable `NodeKey` handle type and own all node
/// storage. The session holds keys, never nodes.
///
/// ## Hierarchy
///
/// Each placement builds `anchor → model → overlay`. Removing the anchor
/// subtree must remove its children with it; [`StageGraph::remove_subtree`]
/// carries that cascading contract.
pub trait StageGraph {
    /// Small copyable node handle.
    type NodeKey: Copy + Eq + core::fmt::Debug;
    /// Loaded 3D model renderable.
    type Model: ModelRenderable;
    /// View-backed overlay renderable (the delete control).
    type Overlay;

    /// Create an anchor node fixed at a world pose and attach it to the
    /// scene root.
    fn create_anchor(&mut self, pose: &Pose) -> Self::NodeKey;

    /// Create an empty child node under `parent`.
    fn create_node(&mut self, parent: Self::NodeKey) -> Self::NodeKey;

    /// Set a node's position relative to its parent.
    fn set_local_position(&mut self, node: Self::NodeKey, position: Vector3<f32>);

    /// Attach a loaded model renderable to a node.
    fn attach_model(&mut self, node: Self::NodeKey, model: Self::Model);

    /// Attach an overlay renderable to a node, making it visible.
    fn attach_overlay(&mut self, node: Self::NodeKey, overlay: Self::Overlay);

    /// Whether an overlay renderable has been attached to `node`.
    fn has_overlay(&self, node: Self::NodeKey) -> bool;

    /// A node's position in world space.
    fn world_position(&self, node: Self::NodeKey) -> Point3<f32>;

    /// Overwrite a node's orientation in world space.
    fn set_world_rotation(&mut self, node: Self::NodeKey, rotation: UnitQuaternion<f32>);

    /// Remove a node and, cascading, all of its descendants from the scene.
    fn remove_subtree(&mut self, node: Self::NodeKey);

    /// The camera's position in world space this frame.
    fn camera_position(&self) -> Point3<f32>;
}

/// The host's transform-manipulation system.
///
/// Placed models are drag/rotate/scale targets owned by the toolkit; the
/// session only selects them and asks whether a gesture is in progress.
pub trait Manipulator<K> {
    /// Mark `node` as the active manipulable object.
    fn select(&mut self, node: K);

    /// Whether a drag/rotate/scale gesture on `node` is currently in
    /// progress.
    fn is_transforming(&self, node: K) -> bool;
}

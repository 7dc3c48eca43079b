// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public geometry types: poses, bounds, and plane hits.

use kurbo::Point;
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// A pose in tracked world space: translation plus orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Point3<f32>,
    /// World-space orientation.
    pub rotation: UnitQuaternion<f32>,
}

impl Pose {
    /// A pose at `position` with no rotation.
    pub fn from_position(position: Point3<f32>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// The identity pose at the world origin.
    pub fn identity() -> Self {
        Self::from_position(Point3::origin())
    }
}

/// Axis-aligned bounding box as a center and half-extents, in the local
/// space of the node it bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Box center.
    pub center: Point3<f32>,
    /// Half the box extent along each axis; components are non-negative.
    pub half_extents: Vector3<f32>,
}

impl Aabb {
    /// Create a box from its center and half-extents.
    pub fn new(center: Point3<f32>, half_extents: Vector3<f32>) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Full extent along each axis.
    pub fn size(&self) -> Vector3<f32> {
        self.half_extents * 2.0
    }

    /// Full extent along the up axis. Overlay controls sit at this height
    /// above their model's origin.
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }
}

/// Identifier of a detected real-world plane, assigned by the host's
/// hit-test source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneId(pub u64);

/// A tap that intersected a detected plane.
///
/// Produced by the host's hit-test source and fed to the session's
/// double-tap handling; the `pose` is where an anchor would be created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneHit {
    /// World-space pose of the hit on the plane.
    pub pose: Pose,
    /// The plane that was hit.
    pub plane: PlaneId,
    /// Screen-space position of the tap.
    pub screen: Point,
}

impl PlaneHit {
    /// A hit at `pose` on `plane`, tapped at `screen`.
    pub fn new(pose: Pose, plane: PlaneId, screen: Point) -> Self {
        Self {
            pose,
            plane,
            screen,
        }
    }
}

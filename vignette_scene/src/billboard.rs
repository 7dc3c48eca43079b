// Copyright 2025 the Vignette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera-facing rotation for overlay nodes.
//!
//! Revealed overlays are re-oriented once per rendered frame so they always
//! face the user. The rotation is computed fresh from the current node and
//! camera positions each frame, so an overlay revealed late pops in already
//! facing the right way.

use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Rotation that turns a node at `node` to face a camera at `camera`, with
/// the world +Y axis kept up.
///
/// Local +Z ends up pointing along the node→camera direction. A degenerate
/// (zero-length) direction yields the identity rotation.
pub fn facing_rotation(node: &Point3<f32>, camera: &Point3<f32>) -> UnitQuaternion<f32> {
    let direction = camera - node;
    if direction.norm_squared() <= f32::EPSILON {
        return UnitQuaternion::identity();
    }
    UnitQuaternion::face_towards(&direction, &Vector3::y())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Vector3<f32>, b: &Vector3<f32>) {
        assert!((a - b).norm() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn rotates_local_z_onto_camera_direction() {
        let node = Point3::new(0.0, 1.0, 0.0);
        let camera = Point3::new(3.0, 1.0, 4.0);

        let rotation = facing_rotation(&node, &camera);

        let forward = rotation * Vector3::z();
        let expected = (camera - node).normalize();
        assert_close(&forward, &expected);
    }

    #[test]
    fn keeps_up_axis_for_level_directions() {
        let node = Point3::origin();
        let camera = Point3::new(0.0, 0.0, 2.0);

        let rotation = facing_rotation(&node, &camera);

        let up = rotation * Vector3::y();
        assert_close(&up, &Vector3::y());
    }

    #[test]
    fn coincident_positions_yield_identity() {
        let position = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            facing_rotation(&position, &position),
            UnitQuaternion::identity()
        );
    }

    #[test]
    fn tracks_a_moving_camera() {
        let node = Point3::origin();
        let before = facing_rotation(&node, &Point3::new(1.0, 0.0, 0.0));
        let after = facing_rotation(&node, &Point3::new(0.0, 0.0, 1.0));

        let forward_before = before * Vector3::z();
        let forward_after = after * Vector3::z();
        assert_close(&forward_before, &Vector3::x());
        assert_close(&forward_after, &Vector3::z());
    }
}

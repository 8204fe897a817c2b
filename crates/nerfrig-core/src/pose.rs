//! Camera poses (position, orientation, field of view).

use glam::{Mat3, Mat4, Quat, Vec3};

/// Up reference used to resolve the free twist of a look-at orientation.
///
/// The scene convention is Z-up, so generated cameras keep their local up
/// axis as close to world +Z as the look direction allows.
pub const UP_REFERENCE: Vec3 = Vec3::Z;

/// A single camera pose produced by rig placement.
///
/// The camera follows the usual graphics convention: local -Z is the view
/// direction and local +Y is up. Poses are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Horizontal field of view in radians.
    pub fov: f32,
}

impl CameraPose {
    /// Creates a pose at `position` looking toward `target`.
    ///
    /// The remaining rotational freedom is resolved against [`UP_REFERENCE`];
    /// when the view direction is (anti-)parallel to it, world +Y is used
    /// instead so the basis stays well-formed.
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, fov: f32) -> Self {
        // Camera looks down local -Z, so local +Z points away from the target.
        let z_axis = (position - target).normalize();

        let mut x_axis = UP_REFERENCE.cross(z_axis);
        if x_axis.length_squared() < 1e-8 {
            x_axis = Vec3::Y.cross(z_axis);
        }
        let x_axis = x_axis.normalize();
        let y_axis = z_axis.cross(x_axis);

        let rotation = Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis));
        Self {
            position,
            rotation,
            fov,
        }
    }

    /// Returns the world-space view direction (local -Z).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Returns the world-space up direction (local +Y).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Returns the full world transform of this pose.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    #[test]
    fn test_look_at_points_at_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let pose = CameraPose::look_at(Vec3::new(6.0, 2.0, 3.0), target, 1.0);

        let expected = (target - pose.position).normalize();
        assert!((pose.forward() - expected).length() < TOL);
    }

    #[test]
    fn test_look_at_keeps_up_reference() {
        // Camera on the equator: up should resolve to exactly world +Z.
        let pose = CameraPose::look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        assert!((pose.up() - Vec3::Z).length() < TOL);
    }

    #[test]
    fn test_look_at_degenerate_vertical() {
        // Looking straight down the up reference must not produce NaNs.
        let pose = CameraPose::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);
        assert!(pose.rotation.is_finite());
        assert!((pose.forward() - Vec3::NEG_Z).length() < TOL);
    }

    #[test]
    fn test_world_matrix_translation() {
        let position = Vec3::new(-2.0, 4.0, 1.5);
        let pose = CameraPose::look_at(position, Vec3::ZERO, 1.0);
        let m = pose.world_matrix();
        assert!((m.w_axis.truncate() - position).length() < TOL);
    }

    #[test]
    fn test_rotation_is_unit() {
        let pose = CameraPose::look_at(Vec3::new(3.0, -1.0, 2.0), Vec3::ZERO, 1.0);
        assert!((pose.rotation.length() - 1.0).abs() < TOL);
    }
}

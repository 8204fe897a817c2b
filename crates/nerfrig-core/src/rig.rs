//! Spherical camera rig placement.
//!
//! Cameras are arranged on a sphere around a center point: `vertical_count`
//! elevation rings spaced strictly between the poles, each carrying
//! `horizontal_count` evenly spaced azimuthal positions. Poses are produced
//! in ring-major order (a full ring of azimuths before the next elevation).

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RigError};
use crate::pose::CameraPose;

/// Name prefix for all objects generated by nerfrig.
pub const NAME_PREFIX: &str = "NerfRig";

/// Returns the canonical name for the camera at `index`.
#[must_use]
pub fn camera_name(index: usize) -> String {
    format!("{NAME_PREFIX}__cam_{index:03}")
}

/// Returns the canonical name for the group holding generated cameras.
#[must_use]
pub fn group_name() -> String {
    format!("{NAME_PREFIX}__cam_coll")
}

/// Parameters for spherical camera rig placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigParams {
    /// Number of cameras per elevation ring.
    pub horizontal_count: u32,
    /// Number of elevation rings.
    pub vertical_count: u32,
    /// Distance from the center to each camera.
    pub distance: f32,
    /// Horizontal field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            horizontal_count: 8,
            vertical_count: 3,
            distance: 5.0,
            fov_degrees: 40.0,
        }
    }
}

impl RigParams {
    /// Checks that all parameters are in range.
    pub fn validate(&self) -> Result<()> {
        if self.horizontal_count < 1 {
            return Err(RigError::InvalidParams(
                "horizontal_count must be at least 1".into(),
            ));
        }
        if self.vertical_count < 1 {
            return Err(RigError::InvalidParams(
                "vertical_count must be at least 1".into(),
            ));
        }
        if self.distance <= f32::EPSILON {
            return Err(RigError::InvalidParams(format!(
                "distance must be positive, got {}",
                self.distance
            )));
        }
        if self.fov_degrees <= f32::EPSILON || self.fov_degrees > 180.0 {
            return Err(RigError::InvalidParams(format!(
                "fov_degrees must be in (0, 180], got {}",
                self.fov_degrees
            )));
        }
        Ok(())
    }

    /// Total number of poses this rig produces.
    #[must_use]
    pub fn pose_count(&self) -> usize {
        self.horizontal_count as usize * self.vertical_count as usize
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Computes all camera poses around `center`, in ring-major order.
    ///
    /// Elevation rings are spaced strictly between the two poles, so no
    /// camera is ever placed exactly at zenith or nadir. Expects validated
    /// parameters; see [`RigParams::validate`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn poses(&self, center: Vec3) -> Vec<CameraPose> {
        let fov = self.fov_radians();
        let mut poses = Vec::with_capacity(self.pose_count());

        for c_idx in 0..self.pose_count() {
            let horiz_idx = c_idx % self.horizontal_count as usize;
            let vert_idx = c_idx / self.horizontal_count as usize;

            let phi = 2.0 * PI * horiz_idx as f32 / self.horizontal_count as f32;
            let theta = PI * (vert_idx as f32 + 1.0) / (self.vertical_count as f32 + 1.0);

            let unit_dir = Vec3::new(
                theta.sin() * phi.cos(),
                theta.sin() * phi.sin(),
                theta.cos(),
            );
            let position = center + unit_dir * self.distance;
            poses.push(CameraPose::look_at(position, center, fov));
        }

        poses
    }
}

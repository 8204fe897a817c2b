//! The `transforms.json` manifest written next to rendered images.
//!
//! The layout follows the instant-ngp dataset convention: a shared
//! horizontal field of view plus one entry per rendered frame carrying the
//! image path (relative to the manifest) and the camera's world transform.

use std::fs;
use std::path::Path;

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Filename of the manifest inside an export directory.
pub const MANIFEST_FILENAME: &str = "transforms.json";

/// One rendered frame: image path and camera world transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Image path relative to the manifest (`./<image>.png`).
    pub file_path: String,
    /// Camera world transform as row-major 4x4 rows.
    pub transform_matrix: [[f32; 4]; 4],
}

/// Ordered record of an export: shared field of view plus per-frame entries.
///
/// Built incrementally, one frame per camera in processing order, and
/// serialized once at the end of an export. Never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Shared horizontal field of view in radians.
    pub camera_angle_x: f32,
    /// Per-frame entries, in camera-processing order.
    pub frames: Vec<Frame>,
}

impl Manifest {
    /// Creates an empty manifest with the given horizontal FOV in radians.
    #[must_use]
    pub fn new(camera_angle_x: f32) -> Self {
        Self {
            camera_angle_x,
            frames: Vec::new(),
        }
    }

    /// Appends a frame for `image_name` with the camera's world transform.
    pub fn push_frame(&mut self, image_name: &str, world_transform: Mat4) {
        self.frames.push(Frame {
            file_path: format!("./{image_name}"),
            // glam matrices are column-major; transposing yields the rows.
            transform_matrix: world_transform.transpose().to_cols_array_2d(),
        });
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frames have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the manifest to `path` as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::pose::CameraPose;

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::new(0.7);
        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
        assert!((manifest.camera_angle_x - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_push_frame_row_major() {
        let mut manifest = Manifest::new(1.0);
        let translation = Vec3::new(1.0, 2.0, 3.0);
        manifest.push_frame(
            "cam.png",
            Mat4::from_rotation_translation(Quat::IDENTITY, translation),
        );

        let rows = &manifest.frames[0].transform_matrix;
        // Row-major: translation lives in the last column of the first three rows.
        assert!((rows[0][3] - 1.0).abs() < 1e-6);
        assert!((rows[1][3] - 2.0).abs() < 1e-6);
        assert!((rows[2][3] - 3.0).abs() < 1e-6);
        assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_frame_order_and_paths() {
        let mut manifest = Manifest::new(1.0);
        for i in 0..3 {
            manifest.push_frame(&format!("img_{i}.png"), Mat4::IDENTITY);
        }
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.frames[0].file_path, "./img_0.png");
        assert_eq!(manifest.frames[2].file_path, "./img_2.png");
    }

    #[test]
    fn test_json_shape() {
        let mut manifest = Manifest::new(0.5);
        let pose = CameraPose::look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 0.5);
        manifest.push_frame("cam_000.png", pose.world_matrix());

        let json = manifest.to_json_pretty().expect("serialization failed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("round trip");

        assert!((value["camera_angle_x"].as_f64().unwrap() - 0.5).abs() < 1e-6);
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0]["file_path"], "./cam_000.png");
        let matrix = frames[0]["transform_matrix"].as_array().unwrap();
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix[0].as_array().unwrap().len(), 4);
        // Position (5, 0, 0) sits in the last column of the rows.
        assert!((matrix[0][3].as_f64().unwrap() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_manifest_round_trip() {
        let mut manifest = Manifest::new(0.9);
        manifest.push_frame("a.png", Mat4::IDENTITY);
        let json = manifest.to_json_pretty().unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.frames, manifest.frames);
    }
}

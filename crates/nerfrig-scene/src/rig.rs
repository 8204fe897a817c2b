//! Camera rig construction and teardown against a scene host.
//!
//! Placement returns a [`CameraRig`] holding the handles of everything it
//! created. Teardown walks those handles instead of scanning the scene for
//! name prefixes, so user objects can never be swept up by accident.

use nerfrig_core::{camera_name, group_name, CameraPose, Result, RigError, RigParams};

use crate::host::{ObjectId, SceneHost};

/// One camera created by rig placement.
#[derive(Debug, Clone)]
pub struct RigCamera {
    /// Host handle of the camera object.
    pub id: ObjectId,
    /// Camera name, also used as the image basename during export.
    pub name: String,
    /// The pose the camera was created with.
    pub pose: CameraPose,
}

/// Owned handles to one placement's cameras and their containing group.
#[derive(Debug, Clone)]
pub struct CameraRig {
    group: ObjectId,
    cameras: Vec<RigCamera>,
}

impl CameraRig {
    /// Handle of the group containing the cameras.
    #[must_use]
    pub fn group(&self) -> ObjectId {
        self.group
    }

    /// The cameras, in placement (ring-major) order.
    #[must_use]
    pub fn cameras(&self) -> &[RigCamera] {
        &self.cameras
    }

    /// Number of cameras in the rig.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Returns true if the rig holds no cameras.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Removes every camera and the containing group from the host.
    ///
    /// Host removal is idempotent, so handles whose objects are already
    /// gone are skipped silently.
    pub fn clear(self, host: &mut dyn SceneHost) {
        let count = self.cameras.len();
        for camera in &self.cameras {
            host.remove_object(camera.id);
        }
        host.remove_object(self.group);
        log::info!("cleared camera rig ({count} cameras)");
    }
}

/// Places a spherical camera rig around the host's active object.
///
/// Validates `params`, reads the center from the active object, creates a
/// group plus `horizontal_count * vertical_count` cameras in ring-major
/// order, and returns handles to everything created.
///
/// # Errors
///
/// [`RigError::InvalidParams`] for out-of-range parameters and
/// [`RigError::NoTargetObject`] when no object is selected.
pub fn build_rig(host: &mut dyn SceneHost, params: &RigParams) -> Result<CameraRig> {
    params.validate()?;

    let target = host.active_object().ok_or(RigError::NoTargetObject)?;
    let center = host
        .object_position(target)
        .ok_or(RigError::NoTargetObject)?;

    let group = host.create_group(&group_name());
    let mut cameras = Vec::with_capacity(params.pose_count());
    for (index, pose) in params.poses(center).into_iter().enumerate() {
        let name = camera_name(index);
        let id = host.create_camera(&name, &pose, group);
        cameras.push(RigCamera { id, name, pose });
    }

    log::info!(
        "placed {} cameras at distance {} around ({}, {}, {})",
        cameras.len(),
        params.distance,
        center.x,
        center.y,
        center.z
    );
    Ok(CameraRig { group, cameras })
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::memory::MemoryScene;

    fn scene_with_target() -> MemoryScene {
        let mut scene = MemoryScene::new();
        let target = scene.add_object("subject", Vec3::new(1.0, 2.0, 3.0));
        scene.set_active_object(target);
        scene
    }

    #[test]
    fn test_build_rig_requires_target() {
        let mut scene = MemoryScene::new();
        let err = build_rig(&mut scene, &RigParams::default()).unwrap_err();
        assert!(matches!(err, RigError::NoTargetObject));
        // Nothing was created.
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_build_rig_creates_cameras_and_group() {
        let mut scene = scene_with_target();
        let params = RigParams {
            horizontal_count: 4,
            vertical_count: 2,
            ..RigParams::default()
        };
        let rig = build_rig(&mut scene, &params).expect("placement failed");

        assert_eq!(rig.len(), 8);
        assert_eq!(scene.object_count(), 10); // target + group + 8 cameras
        assert_eq!(rig.cameras()[0].name, "NerfRig__cam_000");
        assert_eq!(rig.cameras()[7].name, "NerfRig__cam_007");
        assert_eq!(
            scene.object_name(rig.group()).as_deref(),
            Some("NerfRig__cam_coll")
        );

        // Cameras sit on the sphere around the target.
        let center = Vec3::new(1.0, 2.0, 3.0);
        for camera in rig.cameras() {
            let position = scene.object_position(camera.id).unwrap();
            assert!((position.distance(center) - params.distance).abs() < 1e-4);
        }
    }

    #[test]
    fn test_build_rig_rejects_invalid_params() {
        let mut scene = scene_with_target();
        let params = RigParams {
            horizontal_count: 0,
            ..RigParams::default()
        };
        assert!(matches!(
            build_rig(&mut scene, &params),
            Err(RigError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut scene = scene_with_target();
        let rig = build_rig(&mut scene, &RigParams::default()).unwrap();
        let group = rig.group();
        let first_cam = rig.cameras()[0].id;

        rig.clear(&mut scene);
        assert_eq!(scene.object_count(), 1); // only the target remains
        assert!(!scene.contains(group));
        assert!(!scene.contains(first_cam));
    }

    #[test]
    fn test_clear_tolerates_missing_objects() {
        let mut scene = scene_with_target();
        let rig = build_rig(&mut scene, &RigParams::default()).unwrap();

        // Host removed a camera behind our back.
        scene.remove_object(rig.cameras()[2].id);
        rig.clear(&mut scene);
        assert_eq!(scene.object_count(), 1);
    }
}

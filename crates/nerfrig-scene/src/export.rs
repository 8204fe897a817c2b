//! Dataset export: one rendered image per camera plus a manifest.

use std::fs;
use std::path::{Path, PathBuf};

use nerfrig_core::{Manifest, RenderSettings, Result, RigError, MANIFEST_FILENAME};

use crate::host::SceneHost;
use crate::rig::{CameraRig, RigCamera};

/// Summary of a completed dataset export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Directory all output was written to.
    pub output_dir: PathBuf,
    /// Path of the written `transforms.json`.
    pub manifest_path: PathBuf,
    /// Number of rendered frames.
    pub frame_count: usize,
}

/// Renders every camera in `cameras`, in order, into `out_dir`.
///
/// Configures the host renderer once, then for each camera: makes it the
/// active render camera, renders `<out_dir>/<camera_name>.png`, and records
/// a manifest frame with the camera's world transform (falling back to the
/// pose recorded at placement if the host no longer knows the object).
/// The manifest is written last as `transforms.json`, stamped with
/// `camera_angle_x` (the shared horizontal FOV in radians, taken from the
/// caller's current settings rather than the poses).
///
/// The active-camera selection is left on the last camera rendered.
///
/// # Errors
///
/// [`RigError::NoCamerasFound`] when `cameras` is empty (nothing is
/// written); render and I/O failures propagate and may leave a partially
/// written directory behind.
pub fn render_cameras(
    host: &mut dyn SceneHost,
    cameras: &[RigCamera],
    settings: &RenderSettings,
    camera_angle_x: f32,
    out_dir: &Path,
) -> Result<ExportReport> {
    settings.validate()?;
    if cameras.is_empty() {
        return Err(RigError::NoCamerasFound);
    }

    fs::create_dir_all(out_dir)?;
    host.configure_render(settings);
    log::info!("rendering {} cameras to {}", cameras.len(), out_dir.display());

    let mut manifest = Manifest::new(camera_angle_x);
    for camera in cameras {
        host.set_active_camera(camera.id);

        let image_name = format!("{}.png", camera.name);
        let world = host
            .world_transform(camera.id)
            .unwrap_or_else(|| camera.pose.world_matrix());
        manifest.push_frame(&image_name, world);

        host.render_still(&out_dir.join(&image_name))?;
    }

    let manifest_path = out_dir.join(MANIFEST_FILENAME);
    manifest.write(&manifest_path)?;
    log::info!("wrote manifest {}", manifest_path.display());

    Ok(ExportReport {
        output_dir: out_dir.to_path_buf(),
        manifest_path,
        frame_count: cameras.len(),
    })
}

/// Renders a whole rig; see [`render_cameras`].
pub fn render_rig(
    host: &mut dyn SceneHost,
    rig: &CameraRig,
    settings: &RenderSettings,
    camera_angle_x: f32,
    out_dir: &Path,
) -> Result<ExportReport> {
    render_cameras(host, rig.cameras(), settings, camera_angle_x, out_dir)
}

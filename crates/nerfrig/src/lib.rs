//! nerfrig: spherical camera rig placement and NeRF dataset export.
//!
//! Nerfrig places camera objects on a sphere around a target object in a
//! 3D scene and batch-renders one image per camera, writing an
//! instant-ngp style `transforms.json` manifest alongside the images.
//! The scene itself lives behind the [`SceneHost`] trait; [`MemoryScene`]
//! is a ready-made in-memory host for tests and headless runs.
//!
//! # Quick Start
//!
//! ```no_run
//! use nerfrig::*;
//!
//! fn main() -> Result<()> {
//!     // Initialize nerfrig
//!     init()?;
//!
//!     // A scene with a subject to orbit
//!     let mut scene = MemoryScene::new();
//!     let subject = scene.add_object("subject", Vec3::ZERO);
//!     scene.set_active_object(subject);
//!
//!     // Place the rig and render the dataset
//!     generate_cameras(&mut scene)?;
//!     let report = render_dataset(&mut scene, None)?;
//!     println!("dataset written to {}", report.output_dir.display());
//!
//!     shutdown();
//!     Ok(())
//! }
//! ```
//!
//! # Operations
//!
//! - [`generate_cameras`] - place `horizontal x vertical` cameras on a
//!   sphere around the active object (ring-major order, poles avoided)
//! - [`clear_cameras`] - remove every generated camera and its group
//! - [`render_dataset`] - render one PNG per camera into a fresh
//!   uniquely-named directory plus a `transforms.json` manifest

mod state;

// Re-export core types
pub use nerfrig_core::{
    camera_name, group_name,
    error::{Result, RigError},
    CameraPose, Frame, Manifest, RenderSettings, RigParams, MANIFEST_FILENAME, NAME_PREFIX,
};

// Re-export scene types
pub use nerfrig_scene::{
    build_rig, render_cameras, render_rig, CameraRig, ExportReport, MemoryScene, ObjectId,
    RigCamera, SceneHost,
};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};

use std::path::{Path, PathBuf};

use state::{with_context, with_context_mut};

/// Initializes nerfrig with default settings.
///
/// This must be called before any other nerfrig functions.
pub fn init() -> Result<()> {
    let _ = env_logger::try_init();
    state::init_context()?;
    log::info!("nerfrig initialized");
    Ok(())
}

/// Returns whether nerfrig has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    state::is_initialized()
}

/// Shuts down nerfrig, dropping all stored rig handles.
///
/// Host objects are not touched; call [`clear_cameras`] first to remove
/// generated cameras from the scene.
pub fn shutdown() {
    state::shutdown_context();
    log::info!("nerfrig shut down");
}

fn ensure_initialized() -> Result<()> {
    if state::is_initialized() {
        Ok(())
    } else {
        Err(RigError::NotInitialized)
    }
}

/// Sets the placement parameters used by the next [`generate_cameras`].
pub fn set_rig_params(params: RigParams) -> Result<()> {
    ensure_initialized()?;
    params.validate()?;
    with_context_mut(|ctx| ctx.rig_params = params);
    Ok(())
}

/// Returns the current placement parameters.
///
/// # Panics
///
/// Panics if nerfrig has not been initialized.
#[must_use]
pub fn rig_params() -> RigParams {
    with_context(|ctx| ctx.rig_params)
}

/// Sets the render settings used by the next [`render_dataset`].
pub fn set_render_settings(settings: RenderSettings) -> Result<()> {
    ensure_initialized()?;
    settings.validate()?;
    with_context_mut(|ctx| ctx.render_settings = settings);
    Ok(())
}

/// Returns the current render settings.
///
/// # Panics
///
/// Panics if nerfrig has not been initialized.
#[must_use]
pub fn render_settings() -> RenderSettings {
    with_context(|ctx| ctx.render_settings)
}

/// Total number of generated cameras currently tracked.
///
/// # Panics
///
/// Panics if nerfrig has not been initialized.
#[must_use]
pub fn camera_count() -> usize {
    with_context(state::Context::camera_count)
}

/// Places a spherical camera rig around the host's active object.
///
/// Uses the parameters set via [`set_rig_params`]. The created handles are
/// tracked in the global context; generating again stacks another rig on
/// top of the existing ones. Returns the number of cameras placed.
///
/// # Errors
///
/// [`RigError::NoTargetObject`] when no object is selected, plus any
/// parameter validation failure.
pub fn generate_cameras(host: &mut dyn SceneHost) -> Result<usize> {
    ensure_initialized()?;
    let params = with_context(|ctx| ctx.rig_params);
    let rig = build_rig(host, &params)?;
    let count = rig.len();
    with_context_mut(|ctx| ctx.rigs.push(rig));
    Ok(count)
}

/// Removes every generated camera and group from the host.
///
/// A no-op when nothing has been generated; safe to call repeatedly.
pub fn clear_cameras(host: &mut dyn SceneHost) -> Result<()> {
    ensure_initialized()?;
    let rigs = with_context_mut(|ctx| std::mem::take(&mut ctx.rigs));
    for rig in rigs {
        rig.clear(host);
    }
    Ok(())
}

/// Renders every generated camera into a fresh output directory.
///
/// One PNG is rendered per camera, in generation order, followed by a
/// `transforms.json` manifest. The directory is created under `out_root`
/// (defaulting to the system temp directory) with a unique
/// `NerfRig__<timestamp>` name. The manifest's `camera_angle_x` is the
/// FOV currently set via [`set_rig_params`], converted to radians.
///
/// # Errors
///
/// [`RigError::NoCamerasFound`] when no cameras have been generated
/// (nothing is written); render and I/O failures propagate.
pub fn render_dataset(host: &mut dyn SceneHost, out_root: Option<&Path>) -> Result<ExportReport> {
    ensure_initialized()?;
    let (cameras, settings, camera_angle_x) = with_context(|ctx| {
        let cameras: Vec<RigCamera> = ctx
            .rigs
            .iter()
            .flat_map(|rig| rig.cameras().iter().cloned())
            .collect();
        (cameras, ctx.render_settings, ctx.rig_params.fov_radians())
    });
    if cameras.is_empty() {
        return Err(RigError::NoCamerasFound);
    }

    let root = out_root.map_or_else(std::env::temp_dir, Path::to_path_buf);
    let out_dir = unique_output_dir(&root);
    render_cameras(host, &cameras, &settings, camera_angle_x, &out_dir)
}

/// Picks a fresh `NerfRig__<timestamp>` directory name under `root`.
fn unique_output_dir(root: &Path) -> PathBuf {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let base = format!("{NAME_PREFIX}__{stamp}");
    let mut dir = root.join(&base);
    let mut counter = 1u32;
    while dir.exists() {
        dir = root.join(format!("{base}_{counter}"));
        counter += 1;
    }
    dir
}

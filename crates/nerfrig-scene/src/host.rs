//! The scene-host abstraction.

use std::path::Path;

use glam::{Mat4, Vec3};
use nerfrig_core::{CameraPose, RenderSettings, Result};

/// Opaque handle to an object owned by the host scene.
///
/// Handles are issued by the host and stay valid until the object is
/// removed; using a stale handle is a no-op on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Wraps a raw host identifier.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw host identifier.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The contract a host scene environment implements for nerfrig.
///
/// All operations are synchronous; [`SceneHost::render_still`] blocks until
/// the image is on disk. Hosts own all object state - nerfrig only keeps
/// the handles it was given.
pub trait SceneHost {
    /// Returns the currently selected object, if any.
    fn active_object(&self) -> Option<ObjectId>;

    /// Returns an object's world-space position.
    fn object_position(&self, id: ObjectId) -> Option<Vec3>;

    /// Returns an object's name.
    fn object_name(&self, id: ObjectId) -> Option<String>;

    /// Returns an object's full world transform.
    fn world_transform(&self, id: ObjectId) -> Option<Mat4>;

    /// Creates an empty group (collection) object.
    fn create_group(&mut self, name: &str) -> ObjectId;

    /// Creates a camera object inside `group` with the given pose.
    fn create_camera(&mut self, name: &str, pose: &CameraPose, group: ObjectId) -> ObjectId;

    /// Removes an object. Removing a missing or already-removed handle is
    /// a no-op; grouped children are removed together with their group.
    fn remove_object(&mut self, id: ObjectId);

    /// Designates the camera to render from.
    fn set_active_camera(&mut self, id: ObjectId);

    /// Applies render output settings (resolution, PNG with alpha,
    /// transparent film). Called once per export.
    fn configure_render(&mut self, settings: &RenderSettings);

    /// Renders one still image from the active camera to `path`.
    fn render_still(&mut self, path: &Path) -> Result<()>;
}

//! An in-memory scene host.
//!
//! Stands in for a real host application in tests and headless batch runs:
//! objects live in a map keyed by handle, and "rendering" writes a real PNG
//! at the configured resolution so export output can be inspected on disk.

use std::collections::BTreeMap;
use std::path::Path;

use glam::{Mat4, Vec3};
use image::{ImageBuffer, Rgba};
use nerfrig_core::{CameraPose, RenderSettings, Result, RigError};

use crate::host::{ObjectId, SceneHost};

#[derive(Debug, Clone)]
enum ObjectKind {
    Node,
    Group,
    Camera,
}

#[derive(Debug, Clone)]
struct SceneObject {
    name: String,
    kind: ObjectKind,
    transform: Mat4,
    group: Option<ObjectId>,
}

/// In-memory implementation of [`SceneHost`].
#[derive(Default)]
pub struct MemoryScene {
    objects: BTreeMap<u64, SceneObject>,
    next_id: u64,
    active_object: Option<ObjectId>,
    active_camera: Option<ObjectId>,
    render_settings: RenderSettings,
}

impl MemoryScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain object at `position` and returns its handle.
    pub fn add_object(&mut self, name: &str, position: Vec3) -> ObjectId {
        self.insert(SceneObject {
            name: name.to_string(),
            kind: ObjectKind::Node,
            transform: Mat4::from_translation(position),
            group: None,
        })
    }

    /// Marks an object as the current selection.
    pub fn set_active_object(&mut self, id: ObjectId) {
        if self.contains(id) {
            self.active_object = Some(id);
        }
    }

    /// Returns whether an object with this handle exists.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id.raw())
    }

    /// Total number of objects in the scene.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The camera currently designated as render source.
    #[must_use]
    pub fn active_camera(&self) -> Option<ObjectId> {
        self.active_camera
    }

    /// The render settings last applied via [`SceneHost::configure_render`].
    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        self.render_settings
    }

    fn insert(&mut self, object: SceneObject) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId::new(self.next_id);
        self.objects.insert(id.raw(), object);
        id
    }
}

impl SceneHost for MemoryScene {
    fn active_object(&self) -> Option<ObjectId> {
        self.active_object
    }

    fn object_position(&self, id: ObjectId) -> Option<Vec3> {
        self.objects
            .get(&id.raw())
            .map(|obj| obj.transform.w_axis.truncate())
    }

    fn object_name(&self, id: ObjectId) -> Option<String> {
        self.objects.get(&id.raw()).map(|obj| obj.name.clone())
    }

    fn world_transform(&self, id: ObjectId) -> Option<Mat4> {
        self.objects.get(&id.raw()).map(|obj| obj.transform)
    }

    fn create_group(&mut self, name: &str) -> ObjectId {
        self.insert(SceneObject {
            name: name.to_string(),
            kind: ObjectKind::Group,
            transform: Mat4::IDENTITY,
            group: None,
        })
    }

    fn create_camera(&mut self, name: &str, pose: &CameraPose, group: ObjectId) -> ObjectId {
        self.insert(SceneObject {
            name: name.to_string(),
            kind: ObjectKind::Camera,
            transform: pose.world_matrix(),
            group: Some(group),
        })
    }

    fn remove_object(&mut self, id: ObjectId) {
        let Some(removed) = self.objects.remove(&id.raw()) else {
            return;
        };

        // Removing a group takes its members with it.
        let mut gone = vec![id];
        if matches!(removed.kind, ObjectKind::Group) {
            let members: Vec<u64> = self
                .objects
                .iter()
                .filter(|(_, obj)| obj.group == Some(id))
                .map(|(key, _)| *key)
                .collect();
            for key in members {
                self.objects.remove(&key);
                gone.push(ObjectId::new(key));
            }
        }

        for id in gone {
            if self.active_object == Some(id) {
                self.active_object = None;
            }
            if self.active_camera == Some(id) {
                self.active_camera = None;
            }
        }
    }

    fn set_active_camera(&mut self, id: ObjectId) {
        if matches!(
            self.objects.get(&id.raw()).map(|obj| &obj.kind),
            Some(ObjectKind::Camera)
        ) {
            self.active_camera = Some(id);
        }
    }

    fn configure_render(&mut self, settings: &RenderSettings) {
        self.render_settings = *settings;
    }

    fn render_still(&mut self, path: &Path) -> Result<()> {
        let camera = self
            .active_camera
            .ok_or_else(|| RigError::RenderError("no active camera".to_string()))?;
        if !self.contains(camera) {
            return Err(RigError::RenderError("active camera was removed".to_string()));
        }

        let fill = if self.render_settings.transparent_background {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([30, 30, 30, 255])
        };
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_pixel(
            self.render_settings.width,
            self.render_settings.height,
            fill,
        );
        img.save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| RigError::RenderError(format!("failed to save image: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_objects() {
        let mut scene = MemoryScene::new();
        let id = scene.add_object("thing", Vec3::new(1.0, 0.0, 0.0));
        assert!(scene.contains(id));
        assert_eq!(scene.object_name(id).as_deref(), Some("thing"));
        assert_eq!(scene.object_position(id), Some(Vec3::new(1.0, 0.0, 0.0)));

        scene.remove_object(id);
        assert!(!scene.contains(id));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut scene = MemoryScene::new();
        let id = scene.add_object("thing", Vec3::ZERO);
        scene.remove_object(id);
        scene.remove_object(id); // second removal is a no-op
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_active_object_cleared_on_removal() {
        let mut scene = MemoryScene::new();
        let id = scene.add_object("thing", Vec3::ZERO);
        scene.set_active_object(id);
        assert_eq!(scene.active_object(), Some(id));

        scene.remove_object(id);
        assert_eq!(scene.active_object(), None);
    }

    #[test]
    fn test_only_cameras_become_active_camera() {
        let mut scene = MemoryScene::new();
        let node = scene.add_object("thing", Vec3::ZERO);
        scene.set_active_camera(node);
        assert_eq!(scene.active_camera(), None);

        let pose = CameraPose::look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        let group = scene.create_group("grp");
        let cam = scene.create_camera("cam", &pose, group);
        scene.set_active_camera(cam);
        assert_eq!(scene.active_camera(), Some(cam));
    }

    #[test]
    fn test_group_removal_cascades_to_members() {
        let mut scene = MemoryScene::new();
        let pose = CameraPose::look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        let loose = scene.add_object("loose", Vec3::ZERO);
        let group = scene.create_group("grp");
        let cam_a = scene.create_camera("cam_a", &pose, group);
        let cam_b = scene.create_camera("cam_b", &pose, group);
        scene.set_active_camera(cam_b);

        scene.remove_object(group);
        assert!(!scene.contains(group));
        assert!(!scene.contains(cam_a));
        assert!(!scene.contains(cam_b));
        assert_eq!(scene.active_camera(), None);
        // Objects outside the group are untouched.
        assert!(scene.contains(loose));
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn test_render_still_requires_active_camera() {
        let mut scene = MemoryScene::new();
        let path = std::env::temp_dir().join(format!(
            "nerfrig_memory_nocam_{}.png",
            std::process::id()
        ));
        assert!(matches!(
            scene.render_still(&path),
            Err(RigError::RenderError(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_still_writes_png_with_dimensions() {
        let mut scene = MemoryScene::new();
        let pose = CameraPose::look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        let group = scene.create_group("grp");
        let cam = scene.create_camera("cam", &pose, group);
        scene.set_active_camera(cam);
        scene.configure_render(&RenderSettings {
            width: 12,
            height: 7,
            transparent_background: true,
        });

        let path = std::env::temp_dir().join(format!(
            "nerfrig_memory_render_{}.png",
            std::process::id()
        ));
        scene.render_still(&path).expect("render failed");

        let img = image::open(&path).expect("readable png").to_rgba8();
        assert_eq!(img.dimensions(), (12, 7));
        assert_eq!(img.get_pixel(0, 0).0[3], 0); // transparent film

        std::fs::remove_file(&path).ok();
    }
}

//! Scene-host seam for nerfrig.
//!
//! This crate connects the host-independent core to an actual 3D scene:
//! - [`SceneHost`] - the trait a host environment implements (object
//!   creation/removal, active-camera selection, rendering a still image)
//! - [`CameraRig`] - owned handles to the cameras one placement produced
//! - [`render_cameras`] - the dataset export loop
//! - [`MemoryScene`] - an in-memory host used by tests and headless runs

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod export;
pub mod host;
pub mod memory;
pub mod rig;

pub use export::{render_cameras, render_rig, ExportReport};
pub use host::{ObjectId, SceneHost};
pub use memory::MemoryScene;
pub use rig::{build_rig, CameraRig, RigCamera};

//! Core abstractions for nerfrig.
//!
//! This crate provides the host-independent pieces of nerfrig:
//! - [`CameraPose`] - position + look-at orientation + field of view
//! - [`RigParams`] - spherical camera rig placement parameters and algorithm
//! - [`RenderSettings`] - output resolution and film options
//! - [`Manifest`] - the `transforms.json` model written next to rendered images

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod manifest;
pub mod pose;
pub mod rig;
pub mod settings;

pub use error::{Result, RigError};
pub use manifest::{Frame, Manifest, MANIFEST_FILENAME};
pub use pose::CameraPose;
pub use rig::{camera_name, group_name, RigParams, NAME_PREFIX};
pub use settings::RenderSettings;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};

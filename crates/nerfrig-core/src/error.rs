//! Error types for nerfrig.

use thiserror::Error;

/// The main error type for nerfrig operations.
#[derive(Error, Debug)]
pub enum RigError {
    /// Nerfrig has not been initialized.
    #[error("nerfrig not initialized - call nerfrig::init() first")]
    NotInitialized,

    /// Nerfrig has already been initialized.
    #[error("nerfrig already initialized")]
    AlreadyInitialized,

    /// Rig or render parameters are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// No target object is selected for camera placement.
    #[error("no target object selected")]
    NoTargetObject,

    /// No camera objects exist to render from.
    #[error("no camera objects found")]
    NoCamerasFound,

    /// Rendering error surfaced by the scene host.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for nerfrig operations.
pub type Result<T> = std::result::Result<T, RigError>;

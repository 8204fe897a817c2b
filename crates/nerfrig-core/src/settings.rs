//! Render output settings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigError};

/// Settings applied to the host renderer before a dataset export.
///
/// Output format is fixed to PNG with an alpha channel (RGBA8).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Whether to render with a transparent background.
    pub transparent_background: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            transparent_background: true,
        }
    }
}

impl RenderSettings {
    /// Checks that the output dimensions are usable.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(RigError::InvalidParams(format!(
                "render resolution must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

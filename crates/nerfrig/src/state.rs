//! Global state management for nerfrig.

use std::sync::{OnceLock, RwLock};

use nerfrig_core::{RenderSettings, Result, RigError, RigParams};
use nerfrig_scene::CameraRig;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context containing all nerfrig state.
pub struct Context {
    /// Whether nerfrig has been initialized.
    pub initialized: bool,

    /// Placement parameters used by the next generation.
    pub rig_params: RigParams,

    /// Render settings used by the next export.
    pub render_settings: RenderSettings,

    /// Handles of every rig generated so far, in generation order.
    pub rigs: Vec<CameraRig>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            initialized: false,
            rig_params: RigParams::default(),
            render_settings: RenderSettings::default(),
            rigs: Vec::new(),
        }
    }
}

impl Context {
    /// Total number of cameras across all generated rigs.
    pub fn camera_count(&self) -> usize {
        self.rigs.iter().map(CameraRig::len).sum()
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program.
pub fn init_context() -> Result<()> {
    let context = RwLock::new(Context::default());

    CONTEXT
        .set(context)
        .map_err(|_| RigError::AlreadyInitialized)?;

    with_context_mut(|ctx| {
        ctx.initialized = true;
    });

    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if nerfrig has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("nerfrig not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if nerfrig has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("nerfrig not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Shuts down the global context.
///
/// Note: Due to `OnceLock` semantics, the context cannot be re-initialized
/// after shutdown in the same process. Rig handles are dropped; the host
/// objects they point at are untouched.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            ctx.initialized = false;
            ctx.rigs.clear();
        }
    }
}

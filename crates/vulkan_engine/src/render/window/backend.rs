//! Window backend trait
//!
//! The lifecycle only needs three things from a window: whether it has been
//! asked to close, a way to pump its events, and the instance extensions the
//! windowing system needs for presenting to it. Dropping the backend destroys
//! the window.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library failed to initialize
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// The windowing system cannot report its Vulkan surface extensions
    #[error("Failed to get required instance extensions (is Vulkan supported?)")]
    RequiredExtensionsUnavailable,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Window collaborator used by the application lifecycle
pub trait WindowBackend {
    /// Check if the user or the application has requested the window to close
    fn should_close(&self) -> bool;

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Instance extension names needed to present to this window
    fn required_instance_extensions(&self) -> WindowResult<Vec<String>>;
}

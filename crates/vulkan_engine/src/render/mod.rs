//! Rendering backends: the platform window and the Vulkan bootstrap

pub mod vulkan;
pub mod window;

pub use vulkan::{AshDriver, GraphicsDriver, InstanceBootstrapper, VulkanError, VulkanResult};
pub use window::{GlfwWindow, WindowBackend, WindowError, WindowResult};

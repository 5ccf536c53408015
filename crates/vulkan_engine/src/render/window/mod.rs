//! Platform window management

pub mod backend;
pub mod glfw_window;

pub use backend::{WindowBackend, WindowError, WindowResult};
pub use glfw_window::GlfwWindow;

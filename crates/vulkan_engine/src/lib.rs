//! # Vulkan Engine
//!
//! Brings up a GLFW window and a Vulkan instance, and tears both down in a
//! fixed order.
//!
//! ## Bootstrap
//!
//! - **Capability queries**: installed layers and supported instance extensions
//! - **Layer negotiation**: every desired validation layer must be installed
//! - **Extension assembly**: window surface extensions plus debug utils when validating
//! - **Instance construction**: one owned instance per application run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vulkan_engine::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let driver = AshDriver::load()?;
//!     let mut app = Application::new(ApplicationConfig::default(), driver);
//!     app.run(GlfwWindow::new)
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

mod application;

#[cfg(test)]
mod testing;

pub use application::{AppError, AppResult, Application, LifecycleState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppResult, Application, LifecycleState,
        config::{Config, ConfigError},
        core::{ApplicationConfig, EngineConfig, InstanceConfig, ValidationSettings, WindowConfig},
        foundation::logging,
        render::{
            vulkan::{AshDriver, GraphicsDriver, VulkanError},
            window::{GlfwWindow, WindowBackend, WindowError},
        },
    };
}

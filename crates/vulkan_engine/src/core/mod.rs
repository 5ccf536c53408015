//! # Core Engine Module
//!
//! Shared configuration types used by the window, the Vulkan bootstrap and
//! the application lifecycle.

pub mod config;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    InstanceConfig,
    WindowConfig,
    ValidationSettings,
    ENABLE_VALIDATION_LAYERS,
    VALIDATION_LAYERS,
};

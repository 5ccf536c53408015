//! Vulkan bootstrap error types

use ash::vk;
use thiserror::Error;

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// A desired validation layer is not installed
    #[error("Validation Layers Requested, But Not Available! Missing layer: {layer}")]
    CapabilityMissing {
        /// Name of the first desired layer that was not found
        layer: String,
    },

    /// The driver rejected the instance creation request
    #[error("vkCreateInstance failed: {0:?}")]
    InstanceConstructionFailed(vk::Result),

    /// The Vulkan loader library could not be loaded
    #[error("Failed to load Vulkan: {0}")]
    LibraryLoad(String),

    /// A name could not be converted to a C string
    #[error("Name contains an interior NUL byte: {0:?}")]
    InvalidName(String),
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;

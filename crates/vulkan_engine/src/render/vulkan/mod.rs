//! Vulkan instance bootstrap: capability queries, layer negotiation,
//! extension assembly and instance construction

pub mod ash_driver;
pub mod capabilities;
pub mod debug;
pub mod driver;
pub mod error;
pub mod extensions;
pub mod instance;
pub mod layers;

pub use ash_driver::{AshDriver, AshInstance};
pub use capabilities::CapabilityCatalog;
pub use debug::debug_callback;
pub use driver::{
    ApplicationIdentity, ExtensionProperties, GraphicsDriver, InstanceRequest, LayerProperties,
};
pub use error::{VulkanError, VulkanResult};
pub use extensions::{collect_required_extensions, debug_utils_extension_name};
pub use instance::InstanceBootstrapper;
pub use layers::ValidationLayerNegotiator;

//! Graphics driver seam
//!
//! The bootstrap talks to the driver only through [`GraphicsDriver`]. Records
//! coming back from the driver are converted into owned Rust values at the
//! boundary, and the creation request is a plain value until the driver turns
//! it into raw Vulkan structures.

use ash::vk;

use crate::core::InstanceConfig;
use crate::render::vulkan::VulkanResult;

/// An installed instance layer as reported by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerProperties {
    /// Layer name, matched exactly during negotiation
    pub name: String,
    /// Vulkan version the layer was written against
    pub spec_version: u32,
    /// Layer's own version
    pub implementation_version: u32,
    /// Human readable description
    pub description: String,
}

impl LayerProperties {
    /// Layer record with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec_version: 0,
            implementation_version: 0,
            description: String::new(),
        }
    }
}

/// An instance extension as reported by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionProperties {
    /// Extension name
    pub name: String,
    /// Extension revision
    pub spec_version: u32,
}

impl ExtensionProperties {
    /// Extension record with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec_version: 0,
        }
    }
}

/// Application identity record passed to the driver
///
/// Versions are already packed with `vk::make_api_version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationIdentity {
    /// Application name
    pub application_name: String,
    /// Packed application version
    pub application_version: u32,
    /// Engine name
    pub engine_name: String,
    /// Packed engine version
    pub engine_version: u32,
    /// Packed Vulkan API version
    pub api_version: u32,
}

impl ApplicationIdentity {
    /// Build the identity record from instance configuration
    pub fn from_config(config: &InstanceConfig) -> Self {
        let (app_major, app_minor, app_patch) = config.application_version;
        let (engine_major, engine_minor, engine_patch) = config.engine_version;
        let (api_major, api_minor) = config.api_version;

        Self {
            application_name: config.application_name.clone(),
            application_version: vk::make_api_version(0, app_major, app_minor, app_patch),
            engine_name: config.engine_name.clone(),
            engine_version: vk::make_api_version(0, engine_major, engine_minor, engine_patch),
            api_version: vk::make_api_version(0, api_major, api_minor, 0),
        }
    }
}

/// Everything the driver needs to construct an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    /// Descriptive application metadata
    pub application: ApplicationIdentity,
    /// Instance extensions to enable, in order
    pub extensions: Vec<String>,
    /// Instance layers to enable; empty when validation is off
    pub layers: Vec<String>,
}

/// Graphics driver collaborator
///
/// Both enumerations are read-only queries. The instance type owns the root
/// API handle and destroys it when dropped, so holding an `Option` of it is
/// enough to know whether destruction is still owed.
pub trait GraphicsDriver {
    /// Owning root handle returned by [`GraphicsDriver::create_instance`]
    type Instance;

    /// Enumerate installed instance layers
    fn enumerate_instance_layer_properties(&self) -> Result<Vec<LayerProperties>, vk::Result>;

    /// Enumerate instance extensions supported by the loader and implicit layers
    fn enumerate_instance_extension_properties(&self) -> Result<Vec<ExtensionProperties>, vk::Result>;

    /// Construct the root instance
    ///
    /// A driver rejection maps to [`crate::render::vulkan::VulkanError::InstanceConstructionFailed`].
    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<Self::Instance>;
}

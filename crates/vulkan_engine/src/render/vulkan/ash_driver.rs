//! `ash`-backed graphics driver

use ash::{vk, Entry};
use std::ffi::CString;
use std::os::raw::c_char;

use crate::render::vulkan::{
    ExtensionProperties, GraphicsDriver, InstanceRequest, LayerProperties, VulkanError, VulkanResult,
};

/// Graphics driver backed by the system Vulkan loader
pub struct AshDriver {
    entry: Entry,
}

impl AshDriver {
    /// Load the Vulkan loader library at runtime
    pub fn load() -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| VulkanError::LibraryLoad(e.to_string()))?;

        Ok(Self { entry })
    }
}

impl GraphicsDriver for AshDriver {
    type Instance = AshInstance;

    fn enumerate_instance_layer_properties(&self) -> Result<Vec<LayerProperties>, vk::Result> {
        let layers = self.entry.enumerate_instance_layer_properties()?;
        Ok(layers.iter().map(LayerProperties::from).collect())
    }

    fn enumerate_instance_extension_properties(&self) -> Result<Vec<ExtensionProperties>, vk::Result> {
        let extensions = self.entry.enumerate_instance_extension_properties(None)?;
        Ok(extensions.iter().map(ExtensionProperties::from).collect())
    }

    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<AshInstance> {
        let app_name = to_cstring(&request.application.application_name)?;
        let engine_name = to_cstring(&request.application.engine_name)?;

        let extension_names = request.extensions.iter()
            .map(|name| to_cstring(name))
            .collect::<VulkanResult<Vec<_>>>()?;
        let layer_names = request.layers.iter()
            .map(|name| to_cstring(name))
            .collect::<VulkanResult<Vec<_>>>()?;

        // Pointers borrow from the CStrings above, which outlive the call
        let extension_ptrs: Vec<*const c_char> = extension_names.iter().map(|name| name.as_ptr()).collect();
        let layer_ptrs: Vec<*const c_char> = layer_names.iter().map(|name| name.as_ptr()).collect();

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(request.application.application_version)
            .engine_name(&engine_name)
            .engine_version(request.application.engine_version)
            .api_version(request.application.api_version);

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe { self.entry.create_instance(&create_info, None) }
            .map_err(VulkanError::InstanceConstructionFailed)?;

        Ok(AshInstance {
            instance,
            _entry: self.entry.clone(),
        })
    }
}

/// Vulkan instance wrapper with RAII cleanup
pub struct AshInstance {
    instance: ash::Instance,
    // Keeps the loader library mapped while the instance is alive
    _entry: Entry,
}

impl Drop for AshInstance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
        log::debug!("vkDestroyInstance completed");
    }
}

fn to_cstring(name: &str) -> VulkanResult<CString> {
    CString::new(name).map_err(|_| VulkanError::InvalidName(name.to_string()))
}

/// Read a NUL-terminated name out of a fixed-size driver array
#[allow(clippy::cast_sign_loss)]
fn fixed_str(raw: &[c_char]) -> String {
    let bytes: Vec<u8> = raw.iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

impl From<&vk::LayerProperties> for LayerProperties {
    fn from(raw: &vk::LayerProperties) -> Self {
        Self {
            name: fixed_str(&raw.layer_name),
            spec_version: raw.spec_version,
            implementation_version: raw.implementation_version,
            description: fixed_str(&raw.description),
        }
    }
}

impl From<&vk::ExtensionProperties> for ExtensionProperties {
    fn from(raw: &vk::ExtensionProperties) -> Self {
        Self {
            name: fixed_str(&raw.extension_name),
            spec_version: raw.spec_version,
        }
    }
}

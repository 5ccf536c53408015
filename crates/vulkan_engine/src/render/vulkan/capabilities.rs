//! Driver capability queries
//!
//! Absence is reported as an empty set, never as an error: a failed
//! enumeration is logged and treated as "nothing installed".

use crate::render::vulkan::{ExtensionProperties, GraphicsDriver, LayerProperties};

/// Read-only view of the layers and extensions a driver offers
pub struct CapabilityCatalog<'a, D: GraphicsDriver> {
    driver: &'a D,
}

impl<'a, D: GraphicsDriver> CapabilityCatalog<'a, D> {
    /// Create a catalog over the given driver
    pub const fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Installed instance layers
    pub fn available_layers(&self) -> Vec<LayerProperties> {
        self.driver.enumerate_instance_layer_properties().unwrap_or_else(|e| {
            log::warn!("vkEnumerateInstanceLayerProperties failed: {e:?}");
            Vec::new()
        })
    }

    /// Supported instance extensions
    pub fn available_extensions(&self) -> Vec<ExtensionProperties> {
        self.driver.enumerate_instance_extension_properties().unwrap_or_else(|e| {
            log::warn!("vkEnumerateInstanceExtensionProperties failed: {e:?}");
            Vec::new()
        })
    }

    /// Enumerate the supported extensions and write them to the log
    ///
    /// `verbose` selects info level, otherwise the report goes to debug.
    pub fn report_extensions(&self, verbose: bool) -> Vec<ExtensionProperties> {
        let extensions = self.available_extensions();
        let level = if verbose { log::Level::Info } else { log::Level::Debug };

        log::log!(level, "Available Extensions: {}", extensions.len());
        for extension in &extensions {
            log::log!(level, "\t{}", extension.name);
        }

        extensions
    }
}

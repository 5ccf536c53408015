//! Vulkan instance bootstrap
//!
//! Runs the creation sequence in a fixed order:
//!
//! 1. negotiate validation layers (only when validation is enabled)
//! 2. enumerate and report available extensions
//! 3. ask the window for its surface extensions and collect the required list
//! 4. assemble the application identity
//! 5. build the creation request, with layers only when validation is enabled
//! 6. ask the driver for the instance
//!
//! A failure at any step returns before later steps run, so no instance
//! exists when layer negotiation fails.

use crate::core::{InstanceConfig, ValidationSettings};
use crate::render::vulkan::{
    collect_required_extensions, ApplicationIdentity, CapabilityCatalog, GraphicsDriver,
    InstanceRequest, ValidationLayerNegotiator, VulkanError, VulkanResult,
};

/// Builds the root Vulkan instance for one application run
pub struct InstanceBootstrapper<'a, D: GraphicsDriver> {
    driver: &'a D,
    config: &'a InstanceConfig,
    validation: &'a ValidationSettings,
    log_capabilities: bool,
}

impl<'a, D: GraphicsDriver> InstanceBootstrapper<'a, D> {
    /// Create a bootstrapper over a driver
    pub const fn new(driver: &'a D, config: &'a InstanceConfig, validation: &'a ValidationSettings) -> Self {
        Self {
            driver,
            config,
            validation,
            log_capabilities: true,
        }
    }

    /// Report the extension enumeration at info level instead of debug
    #[must_use]
    pub const fn with_capability_logging(mut self, enabled: bool) -> Self {
        self.log_capabilities = enabled;
        self
    }

    /// Run the whole sequence and return the owned instance
    pub fn bootstrap(&self, window_extensions: &[String]) -> VulkanResult<D::Instance> {
        self.negotiate_layers()?;
        self.construct_instance(|| Ok::<_, VulkanError>(window_extensions.to_vec()))
    }

    /// Step 1: check the desired validation layers
    ///
    /// Returns `Ok(false)` without touching the driver when validation is off.
    pub fn negotiate_layers(&self) -> VulkanResult<bool> {
        if !self.validation.enabled {
            log::debug!("Validation disabled, skipping layer negotiation");
            return Ok(false);
        }

        let available = CapabilityCatalog::new(self.driver).available_layers();
        ValidationLayerNegotiator::new(&self.validation.desired_layers).negotiate(&available)?;

        Ok(true)
    }

    /// Steps 2 through 6
    ///
    /// Call only after [`Self::negotiate_layers`] has succeeded.
    /// `window_extensions` is queried in step 3, after the extension report.
    pub fn construct_instance<F, E>(&self, window_extensions: F) -> Result<D::Instance, E>
    where
        F: FnOnce() -> Result<Vec<String>, E>,
        E: From<VulkanError>,
    {
        // Informational only: the required list is not checked against it
        CapabilityCatalog::new(self.driver).report_extensions(self.log_capabilities);

        let window_extensions = window_extensions()?;
        let request = self.instance_request(&window_extensions);
        let instance = self.driver.create_instance(&request)?;

        log::info!("Vulkan instance created successfully");
        Ok(instance)
    }

    /// Steps 3 through 5: the request handed to the driver
    pub fn instance_request(&self, window_extensions: &[String]) -> InstanceRequest {
        let extensions = collect_required_extensions(window_extensions, self.validation.enabled);

        let layers = if self.validation.enabled {
            self.validation.desired_layers.clone()
        } else {
            Vec::new()
        };

        InstanceRequest {
            application: ApplicationIdentity::from_config(self.config),
            extensions,
            layers,
        }
    }
}

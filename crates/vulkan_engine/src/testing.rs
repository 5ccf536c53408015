//! In-memory collaborators for lifecycle tests
//!
//! Both fakes write into a shared [`EventLog`] so tests can assert the order
//! in which windows and instances are created and destroyed.

use ash::vk;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::WindowConfig;
use crate::render::vulkan::{
    ExtensionProperties, GraphicsDriver, InstanceRequest, LayerProperties, VulkanError, VulkanResult,
};
use crate::render::window::{WindowBackend, WindowError, WindowResult};

pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Surface extensions a windowing system on X11 would ask for
pub fn mandated_extensions() -> Vec<String> {
    vec!["VK_KHR_surface".to_string(), "VK_KHR_xcb_surface".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    WindowCreated,
    WindowExtensionsQueried,
    PollEvents,
    WindowDestroyed,
    LayersEnumerated,
    ExtensionsEnumerated,
    InstanceCreated,
    InstanceDestroyed,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

pub struct FakeDriver {
    log: EventLog,
    layers: Vec<LayerProperties>,
    extensions: Vec<ExtensionProperties>,
    enumeration_error: Option<vk::Result>,
    creation_error: Option<vk::Result>,
    requests: RefCell<Vec<InstanceRequest>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::with_log(EventLog::default())
    }

    pub fn with_log(log: EventLog) -> Self {
        Self {
            log,
            layers: Vec::new(),
            extensions: Vec::new(),
            enumeration_error: None,
            creation_error: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_layers<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.layers = names.into_iter().map(LayerProperties::named).collect();
        self
    }

    pub fn with_extensions<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.extensions = names.into_iter().map(ExtensionProperties::named).collect();
        self
    }

    pub fn failing_enumeration(mut self, error: vk::Result) -> Self {
        self.enumeration_error = Some(error);
        self
    }

    pub fn failing_creation(mut self, error: vk::Result) -> Self {
        self.creation_error = Some(error);
        self
    }

    pub fn last_request(&self) -> Option<InstanceRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.events()
    }
}

impl GraphicsDriver for FakeDriver {
    type Instance = FakeInstance;

    fn enumerate_instance_layer_properties(&self) -> Result<Vec<LayerProperties>, vk::Result> {
        self.log.push(Event::LayersEnumerated);
        match self.enumeration_error {
            Some(error) => Err(error),
            None => Ok(self.layers.clone()),
        }
    }

    fn enumerate_instance_extension_properties(&self) -> Result<Vec<ExtensionProperties>, vk::Result> {
        self.log.push(Event::ExtensionsEnumerated);
        match self.enumeration_error {
            Some(error) => Err(error),
            None => Ok(self.extensions.clone()),
        }
    }

    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<FakeInstance> {
        self.requests.borrow_mut().push(request.clone());

        if let Some(error) = self.creation_error {
            return Err(VulkanError::InstanceConstructionFailed(error));
        }

        self.log.push(Event::InstanceCreated);
        Ok(FakeInstance { log: self.log.clone() })
    }
}

pub struct FakeInstance {
    log: EventLog,
}

impl Drop for FakeInstance {
    fn drop(&mut self) {
        self.log.push(Event::InstanceDestroyed);
    }
}

pub struct FakeWindow {
    log: EventLog,
    close_after: usize,
    polls: usize,
    vulkan_supported: bool,
}

impl FakeWindow {
    /// Window that reports close on the first check
    pub fn new(log: EventLog, _config: &WindowConfig) -> Self {
        log.push(Event::WindowCreated);
        Self {
            log,
            close_after: 0,
            polls: 0,
            vulkan_supported: true,
        }
    }

    pub fn closing_after(mut self, polls: usize) -> Self {
        self.close_after = polls;
        self
    }

    pub fn without_vulkan(mut self) -> Self {
        self.vulkan_supported = false;
        self
    }
}

impl WindowBackend for FakeWindow {
    fn should_close(&self) -> bool {
        self.polls >= self.close_after
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        self.log.push(Event::PollEvents);
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.log.push(Event::WindowExtensionsQueried);
        if self.vulkan_supported {
            Ok(mandated_extensions())
        } else {
            Err(WindowError::RequiredExtensionsUnavailable)
        }
    }
}

impl Drop for FakeWindow {
    fn drop(&mut self) {
        self.log.push(Event::WindowDestroyed);
    }
}

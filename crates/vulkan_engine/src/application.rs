//! Application lifecycle: window, instance, event loop and ordered teardown

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::{ApplicationConfig, ValidationSettings, WindowConfig};
use crate::render::vulkan::{GraphicsDriver, InstanceBootstrapper, VulkanError};
use crate::render::window::{WindowBackend, WindowError, WindowResult};

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Window creation or query failed
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Layer negotiation or instance construction failed
    #[error(transparent)]
    Vulkan(#[from] VulkanError),

    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A lifecycle step was attempted out of order
    #[error("Invalid lifecycle transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// State the application was in
        from: LifecycleState,
        /// State that was requested
        to: LifecycleState,
    },
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Lifecycle state of one application run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Nothing allocated yet
    Uninitialized,
    /// Window is open
    WindowReady,
    /// Validation layers were found (skipped when validation is off)
    LayersNegotiated,
    /// Vulkan instance exists
    InstanceLive,
    /// Pumping window events
    Running,
    /// Everything released
    TornDown,
}

impl LifecycleState {
    /// Whether moving from `self` to `next` is allowed
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::WindowReady)
                | (Self::WindowReady, Self::LayersNegotiated | Self::InstanceLive)
                | (Self::LayersNegotiated, Self::InstanceLive)
                | (Self::InstanceLive, Self::Running)
                | (_, Self::TornDown)
        )
    }
}

/// Top-level driver of one run
///
/// Owns the window and the instance. [`Application::run`] always finishes with
/// [`Application::cleanup`], which releases the instance (if one was created)
/// before the window (if one was opened).
pub struct Application<D: GraphicsDriver, W: WindowBackend> {
    // Field order is drop order: the instance must go before the window
    instance: Option<D::Instance>,
    window: Option<W>,
    driver: D,
    config: ApplicationConfig,
    validation: ValidationSettings,
    state: LifecycleState,
}

impl<D: GraphicsDriver, W: WindowBackend> Application<D, W> {
    /// Create an application using the validation settings of this build
    pub fn new(config: ApplicationConfig, driver: D) -> Self {
        Self {
            instance: None,
            window: None,
            driver,
            config,
            validation: ValidationSettings::from_build(),
            state: LifecycleState::Uninitialized,
        }
    }

    /// Override the validation settings
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationSettings) -> Self {
        self.validation = validation;
        self
    }

    /// Current lifecycle state
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// The live instance, if one has been created and not yet released
    pub const fn instance(&self) -> Option<&D::Instance> {
        self.instance.as_ref()
    }

    /// The open window, if any
    pub const fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    /// Open the window, build the instance, pump events until close, then clean up
    ///
    /// Cleanup runs on every path. The first error is returned after it.
    pub fn run<F>(&mut self, open_window: F) -> AppResult<()>
    where
        F: FnOnce(&WindowConfig) -> WindowResult<W>,
    {
        let result = self.init_window(open_window)
            .and_then(|()| self.init_vulkan())
            .and_then(|()| self.main_loop());

        self.cleanup();
        result
    }

    fn init_window<F>(&mut self, open_window: F) -> AppResult<()>
    where
        F: FnOnce(&WindowConfig) -> WindowResult<W>,
    {
        self.check_transition(LifecycleState::WindowReady)?;

        let window = open_window(&self.config.window)?;
        self.window = Some(window);
        self.transition(LifecycleState::WindowReady)
    }

    fn init_vulkan(&mut self) -> AppResult<()> {
        self.check_transition(LifecycleState::InstanceLive)?;
        if self.window.is_none() {
            return Err(self.invalid_transition(LifecycleState::InstanceLive));
        }

        if self.bootstrapper().negotiate_layers()? {
            self.transition(LifecycleState::LayersNegotiated)?;
        }

        // The window is asked for its extensions only once layers are settled
        let Some(window) = self.window.as_ref() else {
            return Err(self.invalid_transition(LifecycleState::InstanceLive));
        };
        let instance = self.bootstrapper()
            .construct_instance(|| Ok::<_, AppError>(window.required_instance_extensions()?))?;
        self.instance = Some(instance);
        self.transition(LifecycleState::InstanceLive)
    }

    fn main_loop(&mut self) -> AppResult<()> {
        self.transition(LifecycleState::Running)?;

        if let Some(window) = self.window.as_mut() {
            while !window.should_close() {
                window.poll_events();
            }
        }

        log::info!("Window close requested, leaving main loop");
        Ok(())
    }

    /// Release the instance, then the window
    ///
    /// Safe to call at any point and more than once; only what was actually
    /// created is released.
    pub fn cleanup(&mut self) {
        if self.state == LifecycleState::TornDown {
            return;
        }

        if let Some(instance) = self.instance.take() {
            drop(instance);
            log::info!("Vulkan instance destroyed");
        }

        if let Some(window) = self.window.take() {
            drop(window);
            log::info!("Window destroyed");
        }

        self.state = LifecycleState::TornDown;
    }

    fn bootstrapper(&self) -> InstanceBootstrapper<'_, D> {
        InstanceBootstrapper::new(&self.driver, &self.config.instance, &self.validation)
            .with_capability_logging(self.config.engine.log_capabilities)
    }

    fn check_transition(&self, next: LifecycleState) -> AppResult<()> {
        if self.state.can_transition_to(next) {
            Ok(())
        } else {
            Err(self.invalid_transition(next))
        }
    }

    fn transition(&mut self, next: LifecycleState) -> AppResult<()> {
        self.check_transition(next)?;
        log::debug!("Lifecycle: {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }

    const fn invalid_transition(&self, to: LifecycleState) -> AppError {
        AppError::InvalidTransition { from: self.state, to }
    }
}

impl<D: GraphicsDriver, W: WindowBackend> Drop for Application<D, W> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

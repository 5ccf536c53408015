//! # Unified Configuration System
//!
//! Configuration for the window, the Vulkan instance identity and the engine's
//! own logging behavior. Everything here is file-configurable except the
//! validation switch, which is fixed per build.
//!
//! ## Configuration Categories
//!
//! - **Window Config**: size, title and resizability of the platform window
//! - **Instance Config**: application identity handed to the Vulkan driver
//! - **Engine Config**: log level and capability-report verbosity

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};

/// Whether validation layers are compiled in
///
/// Fixed per build: debug builds negotiate validation layers and request the
/// debug utils extension, release builds do neither.
pub const ENABLE_VALIDATION_LAYERS: bool = cfg!(debug_assertions);

/// Validation layers requested when validation is enabled
pub const VALIDATION_LAYERS: &[&str] = &["VK_LAYER_KHRONOS_validation"];

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given size and title
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            resizable: false,
        }
    }

    /// Validate the window configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(800, 600, "Vulkan Project")
    }
}

/// # Vulkan Instance Configuration
///
/// Descriptive metadata passed to the driver at instance creation. It has no
/// behavioral effect beyond driver-side logging and compatibility heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Application name for Vulkan instance creation
    pub application_name: String,
    /// Application version (major, minor, patch)
    pub application_version: (u32, u32, u32),
    /// Engine name reported to the driver
    pub engine_name: String,
    /// Engine version (major, minor, patch)
    pub engine_version: (u32, u32, u32),
    /// Requested Vulkan API version (major, minor)
    pub api_version: (u32, u32),
}

impl InstanceConfig {
    /// Create a new instance configuration
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            application_name: app_name.into(),
            application_version: (1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: (1, 0, 0),
            api_version: (1, 0),
        }
    }

    /// Set application version
    pub fn with_version(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.application_version = (major, minor, patch);
        self
    }

    /// Set engine name and version
    pub fn with_engine(mut self, name: impl Into<String>, version: (u32, u32, u32)) -> Self {
        self.engine_name = name.into();
        self.engine_version = version;
        self
    }

    /// Validate the configuration
    ///
    /// Names end up as C strings, so they must be non-empty and free of NUL bytes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name("Application name", &self.application_name)?;
        validate_name("Engine name", &self.engine_name)?;

        if self.api_version.0 == 0 {
            return Err(ConfigError::Invalid("API major version must be at least 1".to_string()));
        }

        Ok(())
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self::new("First Triangle")
    }
}

fn validate_name(what: &str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Invalid(format!("{what} cannot be empty")));
    }
    if name.contains('\0') {
        return Err(ConfigError::Invalid(format!("{what} cannot contain NUL bytes")));
    }
    Ok(())
}

/// # Engine Configuration
///
/// Logging behavior of the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, used when `RUST_LOG` is not set
    pub log_level: String,
    /// Report driver capabilities at info level instead of debug
    pub log_capabilities: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            log_capabilities: true,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable the capability report at info level
    pub fn with_capability_logging(mut self, enabled: bool) -> Self {
        self.log_capabilities = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration loaded from a TOML or RON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Platform window configuration
    pub window: WindowConfig,
    /// Vulkan instance configuration
    pub instance: InstanceConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.instance.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}

/// Validation settings for one bootstrap
///
/// Not part of the config file: the build decides whether validation is on.
/// Carried as a value so the bootstrapper never reads ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSettings {
    /// Negotiate layers and request the debug extension
    pub enabled: bool,
    /// Layers that must all be installed when enabled, in request order
    pub desired_layers: Vec<String>,
}

impl ValidationSettings {
    /// Settings fixed by the current build
    pub fn from_build() -> Self {
        Self {
            enabled: ENABLE_VALIDATION_LAYERS,
            desired_layers: VALIDATION_LAYERS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Validation enabled with the given desired layers
    pub fn enabled<S: Into<String>>(layers: impl IntoIterator<Item = S>) -> Self {
        Self {
            enabled: true,
            desired_layers: layers.into_iter().map(Into::into).collect(),
        }
    }

    /// Validation disabled
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            desired_layers: Vec::new(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self::from_build()
    }
}

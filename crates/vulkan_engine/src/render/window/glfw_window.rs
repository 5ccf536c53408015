//! GLFW-based window for Vulkan rendering
//!
//! The window is created without a client API so GLFW sets up no OpenGL
//! context. Dropping [`GlfwWindow`] destroys the window and then releases the
//! GLFW context, which terminates the library.

use crate::core::WindowConfig;
use crate::render::window::{WindowBackend, WindowError, WindowResult};

/// GLFW window wrapper with proper resource management
pub struct GlfwWindow {
    // Field order is drop order: the window must go before the GLFW context
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl GlfwWindow {
    /// Initialize GLFW and open a window
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        // Configure for Vulkan (no OpenGL context)
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_close_polling(true);

        log::info!("Window created: {}x{} \"{}\"", config.width, config.height, config.title);

        Ok(Self {
            window,
            events,
            glfw,
        })
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();

        // Nothing consumes events yet; drain them so the channel stays empty
        for (_, event) in glfw::flush_messages(&self.events) {
            log::trace!("Window event: {event:?}");
        }
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or(WindowError::RequiredExtensionsUnavailable)
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window");
    }
}

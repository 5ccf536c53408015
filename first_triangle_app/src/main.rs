//! First triangle application
//!
//! Opens an 800x600 window, brings up a Vulkan instance, and waits for the
//! window to be closed. Pass a `.toml` or `.ron` file as the first argument to
//! override the defaults.

use std::process::ExitCode;

use vulkan_engine::prelude::*;

fn main() -> ExitCode {
    let result = run();
    match &result {
        Ok(()) => log::info!("Application finished successfully"),
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::from(exit_status(&result))
}

/// Process status for a finished run: 0 on success, 1 on any failure
const fn exit_status(result: &AppResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn run() -> AppResult<()> {
    let config = load_config()?;
    logging::init(&config.engine.log_level);

    log::info!("Starting {}", config.instance.application_name);

    let driver = AshDriver::load()?;
    let mut app = Application::new(config, driver);
    app.run(GlfwWindow::new)
}

fn load_config() -> AppResult<ApplicationConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => ApplicationConfig::load_from_file(path)?,
        None => ApplicationConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

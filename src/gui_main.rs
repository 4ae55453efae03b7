//! TextForm GUI Entry Point
//!
//! Launches the desktop window with the default configuration.

#![windows_subsystem = "windows"]

use textform::{logging, AppConfig, VERSION};

fn main() -> textform::Result<()> {
    let config = AppConfig::default();

    let level = logging::parse_level(&config.log_level)?;
    logging::init(config.log_file.as_deref(), level)?;
    logging::separator(&format!("TextForm GUI {} starting up", VERSION));

    let result = textform::gui::run(&config);
    logging::flush();
    result
}

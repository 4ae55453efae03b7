pub mod app;
pub mod colors;

pub use app::TextFormApp;

/// Entry point: launch the native GUI window
pub fn run(config: &crate::AppConfig) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("TextForm")
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };

    log::info!(target: "gui", "desktop UI starting (debounce {} ms)", config.debounce_ms);

    let config = config.clone();
    eframe::run_native(
        "TextForm",
        native_options,
        Box::new(move |cc| Ok(Box::new(TextFormApp::new(cc, &config)))),
    )
    .map_err(|e| crate::TextFormError::GuiError(e.to_string()))
}

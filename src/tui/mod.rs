//! Terminal front-end

pub mod app;
pub mod colors;
pub mod input;
pub mod ui;

/// Entry point: take over the terminal and run until the user quits
pub fn run(config: &crate::AppConfig) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    log::info!(target: "tui", "terminal UI started (debounce {} ms)", config.debounce_ms);

    let mut app = app::App::new(config);
    let result = app.run(&mut terminal);

    ratatui::restore();
    log::info!(target: "tui", "terminal UI stopped with {} entries", app.form.items().len());
    result
}

//! Main TextForm window

use crate::gui::colors;
use crate::highlight::{Highlighter, Segment};
use crate::{AppConfig, Dropdown, TextForm, NO_RESULTS};
use eframe::egui;
use egui::text::LayoutJob;
use std::time::Instant;

/// Main application state
pub struct TextFormApp {
    /// Form state shared with the TUI
    form: TextForm,
    /// Entry field buffer
    draft_buf: String,
    /// Search field buffer
    query_buf: String,
    /// First frame flag (for auto-focus)
    first_frame: bool,
    /// Status bar message
    status_message: String,
}

impl TextFormApp {
    /// Create a new TextFormApp
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            form: config.new_form(),
            draft_buf: String::new(),
            query_buf: String::new(),
            first_frame: true,
            status_message: "Ready".to_string(),
        }
    }

    fn submit(&mut self) {
        if self.form.submit() {
            self.draft_buf.clear();
            self.status_message = format!("{} entries", self.form.items().len());
        } else {
            self.status_message = "Nothing to add".to_string();
        }
    }

    /// Render the entry field and Add button
    fn render_entry_form(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("entry_form").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.draft_buf)
                        .desired_width(ui.available_width() - 60.0)
                        .hint_text("Input text"),
                );

                if self.first_frame {
                    response.request_focus();
                    self.first_frame = false;
                }

                if response.changed() {
                    self.form.update_draft(self.draft_buf.clone());
                }

                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui.button("Add").clicked();

                if enter_pressed || clicked {
                    self.submit();
                    if enter_pressed {
                        response.request_focus();
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    /// Render the search field and, while it has focus, the results dropdown
    fn render_search(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.query_buf)
                .desired_width(f32::INFINITY)
                .hint_text("Search..."),
        );

        if response.gained_focus() {
            self.form.on_focus();
        }
        if response.changed() {
            self.form.update_query(self.query_buf.clone(), Instant::now());
        }
        if response.lost_focus() {
            self.form.on_blur();
        }

        let dropdown = self.form.dropdown();
        if !dropdown.is_visible() {
            return;
        }

        let width = response.rect.width();
        egui::Area::new(egui::Id::new("search_dropdown"))
            .order(egui::Order::Foreground)
            .fixed_pos(response.rect.left_bottom())
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(width);
                    match dropdown {
                        Dropdown::Hidden => {}
                        Dropdown::NoResults => {
                            ui.label(
                                egui::RichText::new(NO_RESULTS)
                                    .italics()
                                    .color(colors::MUTED),
                            );
                        }
                        Dropdown::Results(results) => {
                            render_results(ui, self.form.highlighter(), results);
                        }
                    }
                });
            });
    }

    /// Render the submitted entries
    fn render_text_list(&self, ui: &mut egui::Ui) {
        ui.heading("Text List");
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (i, item) in self.form.items().iter().enumerate() {
                    egui::Frame::new().fill(colors::row_bg(i)).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(egui::RichText::new(item).color(colors::TEXT));
                    });
                }
            });
    }

    /// Render status bar
    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.form.has_pending_search() {
                    ui.spinner();
                    ui.label("Searching...");
                } else {
                    ui.label(&self.status_message);
                    ui.separator();
                    ui.label(format!("{} entries", self.form.items().len()));
                }
            });
        });
    }
}

/// Dropdown rows with highlighted terms
fn render_results(ui: &mut egui::Ui, highlighter: Option<&Highlighter>, results: &[String]) {
    egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
        for entry in results {
            match highlighter {
                Some(h) => {
                    let job = layout_segments(&h.segments(entry), ui.style());
                    ui.label(job);
                }
                None => {
                    ui.label(entry);
                }
            }
        }
    });
}

/// Compose highlight segments into one label layout
pub fn layout_segments(segments: &[Segment<'_>], style: &egui::Style) -> LayoutJob {
    let font_id = egui::TextStyle::Body.resolve(style);
    let mut job = LayoutJob::default();
    for segment in segments {
        let format = match segment {
            Segment::Plain(_) => egui::TextFormat {
                font_id: font_id.clone(),
                color: colors::TEXT,
                ..Default::default()
            },
            Segment::Highlight(_) => egui::TextFormat {
                font_id: font_id.clone(),
                color: colors::HIGHLIGHT_FG,
                background: colors::HIGHLIGHT_BG,
                ..Default::default()
            },
        };
        job.append(segment.text(), 0.0, format);
    }
    job
}

impl eframe::App for TextFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.form.tick(now);

        self.render_entry_form(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_search(ui);
            ui.add_space(8.0);
            self.render_text_list(ui);
        });

        // Wake up for the pending search even without input
        if let Some(deadline) = self.form.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

impl Drop for TextFormApp {
    fn drop(&mut self) {
        self.form.unmount();
        log::info!(target: "gui", "window closed with {} entries", self.form.items().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_keeps_text_and_marks_matches() {
        let h = Highlighter::new("wor").unwrap();
        let job = layout_segments(&h.segments("Hello World"), &egui::Style::default());
        assert_eq!(job.text, "Hello World");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[1].format.background, colors::HIGHLIGHT_BG);
        assert_eq!(job.sections[0].format.background, egui::Color32::TRANSPARENT);
    }
}

//! Message input panel with history recall

use std::time::Instant;

use eframe::egui;

use crate::app::WidgetApp;
use crate::controller::Submission;

impl WidgetApp {
    /// Render the input row at the bottom of the panel.
    pub(in crate::app) fn render_input_panel(
        &mut self,
        ctx: &egui::Context,
        now: Instant,
        opacity: f32,
    ) {
        let theme = self.get_theme();

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.input_fill)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.input.message_input)
                            .desired_width(ui.available_width() - 64.0)
                            .hint_text("Type a message..."),
                    );

                    // Sent-message recall
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                        self.input.history_up();
                    }
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                        self.input.history_down();
                    }

                    // Esc clears the field
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        self.input.clear();
                    }

                    let enter_pressed = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let send_clicked = ui.button("Send").clicked();

                    if send_clicked || enter_pressed {
                        let attempted = self.input.message_input.trim().to_string();
                        match self.controller.submit(&self.input.message_input, now) {
                            Submission::Sent => {
                                self.input.push_history(&attempted);
                                self.input.clear();
                                response.request_focus();
                            }
                            Submission::Rejected { .. } => {
                                // The attempted text is discarded, not queued
                                self.input.clear();
                                response.request_focus();
                            }
                            Submission::Ignored => {}
                        }
                    }
                });
            });
    }
}

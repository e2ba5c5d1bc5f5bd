//! Launcher bubble and chat panel chrome

use std::time::Instant;

use eframe::egui;

use crate::app::WidgetApp;
use crate::ui;

impl WidgetApp {
    /// The floating bubble shown while the panel is closed.
    pub(in crate::app) fn render_launcher_bubble(&mut self, ctx: &egui::Context, now: Instant) {
        let theme = self.get_theme();

        egui::Area::new(egui::Id::new("launcher_bubble"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                let bubble = egui::Button::new(egui::RichText::new("💬").size(22.0))
                    .fill(theme.accent)
                    .corner_radius(28.0)
                    .min_size(egui::vec2(56.0, 56.0));

                if ui.add(bubble).on_hover_text("Chat with us").clicked() {
                    self.controller.open(now);
                }
            });
    }

    /// The open chat panel: header, transcript, input row.
    pub(in crate::app) fn render_chat_panel(&mut self, ctx: &egui::Context, now: Instant) {
        let theme = self.get_theme();
        // Exit fade: the panel stays interactive while it plays
        let opacity = self.controller.state.panel_opacity(now);

        egui::TopBottomPanel::top("chat_header")
            .frame(
                egui::Frame::new()
                    .fill(theme.header_fill)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Chat")
                            .size(16.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").on_hover_text("Close").clicked() {
                            self.controller.request_close(now);
                        }
                        if ui.button("💾").on_hover_text("Save transcript").clicked() {
                            self.controller.save_transcript(now);
                        }
                    });
                });
            });

        self.render_input_panel(ctx, now, opacity);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.panel_fill))
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                ui::render_transcript(ui, &mut self.controller.transcript, now, &theme);
            });
    }
}

//! Main update loop

use std::time::{Duration, Instant};

use eframe::egui;

use super::WidgetApp;
use crate::ui;

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process responder events
        self.process_events();

        let now = Instant::now();
        let animating = self.controller.tick(now);

        // Keep checking for events; tighter cadence while anything animates
        ctx.request_repaint_after(if animating {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(100)
        });

        if self.controller.state.panel_visible() {
            self.render_chat_panel(ctx, now);
        } else {
            self.render_launcher_bubble(ctx, now);
        }

        ui::render_status_toasts(ctx, &self.controller.state.status_messages);
    }
}

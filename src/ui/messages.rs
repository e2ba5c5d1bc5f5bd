//! Transcript rendering: message bubbles with click-to-reveal timestamps,
//! entrance fades, the start marker, and the pending indicator.

use std::time::Instant;

use eframe::egui;

use crate::transcript::{MessageEntry, Sender, Transcript};
use crate::ui::theme::WidgetTheme;

/// How long the entrance and timestamp fades run.
const FADE_SECS: f32 = 0.2;

/// Frames of the pending-indicator dots, cycled while waiting.
const DOT_FRAMES: [&str; 3] = [".", "..", "..."];

/// Draw the whole transcript inside a scroll area, newest content kept in
/// view. Clicking a bubble toggles its "Sent at" label.
pub fn render_transcript(
    ui: &mut egui::Ui,
    transcript: &mut Transcript,
    now: Instant,
    theme: &WidgetTheme,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if let Some(marker) = transcript.start_marker.clone() {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(marker).size(11.0).color(theme.text_muted));
                });
                ui.add_space(6.0);
            }

            for entry in transcript.entries_mut() {
                render_message_unit(ui, entry, now, theme);
            }

            if let Some(pending) = transcript.pending() {
                let elapsed = now.duration_since(pending.since).as_millis() as usize;
                render_pending_dots(ui, DOT_FRAMES[elapsed / 300 % DOT_FRAMES.len()], theme);
            }

            ui.add_space(8.0);

            if transcript.scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                transcript.scroll_to_bottom = false;
            }
        });
}

/// One message bubble plus its companion timestamp label.
fn render_message_unit(
    ui: &mut egui::Ui,
    entry: &mut MessageEntry,
    now: Instant,
    theme: &WidgetTheme,
) {
    let (layout, fill, text_color) = match entry.sender {
        Sender::User => (
            egui::Layout::top_down(egui::Align::Max),
            theme.user_bubble,
            theme.user_text,
        ),
        Sender::Bot => (
            egui::Layout::top_down(egui::Align::Min),
            theme.bot_bubble,
            theme.bot_text,
        ),
    };

    ui.add_space(4.0);
    ui.with_layout(layout, |ui| {
        // Entrance fade, driven by elapsed time since insertion
        let entrance = fade_alpha(entry.appeared_at, now);
        ui.scope(|ui| {
            ui.multiply_opacity(entrance);

            let response = egui::Frame::new()
                .fill(fill)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.set_max_width(ui.available_width() * 0.75);
                    ui.label(
                        egui::RichText::new(entry.visible_text())
                            .size(14.0)
                            .color(text_color),
                    );
                })
                .response
                .interact(egui::Sense::click());

            if response.clicked() {
                entry.toggle_timestamp(now);
            }

            if entry.timestamp_visible {
                let alpha = entry
                    .timestamp_revealed_at
                    .map(|at| fade_alpha(at, now))
                    .unwrap_or(1.0);
                ui.label(
                    egui::RichText::new(entry.timestamp_label())
                        .size(10.0)
                        .color(theme.text_muted.linear_multiply(alpha)),
                );
            }
        });
    });
    ui.add_space(4.0);
}

/// The three animated dots shown while a reply is awaited.
fn render_pending_dots(ui: &mut egui::Ui, dots: &str, theme: &WidgetTheme) {
    ui.add_space(4.0);
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        egui::Frame::new()
            .fill(theme.bot_bubble)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(dots)
                        .size(16.0)
                        .strong()
                        .color(theme.text_muted),
                );
            });
    });
    ui.add_space(4.0);
}

fn fade_alpha(since: Instant, now: Instant) -> f32 {
    (now.duration_since(since).as_secs_f32() / FADE_SECS).clamp(0.0, 1.0)
}

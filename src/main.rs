//! Replybox - a desktop chat widget backed by an HTTP responder
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for responder HTTP calls
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use replybox::app::WidgetApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Replybox",
        options,
        Box::new(|cc| Ok(Box::new(WidgetApp::new(cc)))),
    )
}

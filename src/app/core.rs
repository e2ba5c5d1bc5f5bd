//! Core WidgetApp struct definition and initialization

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::controller::ChatController;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, WidgetEvent};
use crate::ui::WidgetTheme;

pub struct WidgetApp {
    // Conversation state (panel, transcript, rate limiter)
    pub controller: ChatController,

    // Persisted settings (endpoint, timings, theme)
    pub settings: Settings,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<WidgetEvent>,

    // Input state (message composition, sent history)
    pub input: InputState,
}

impl WidgetApp {
    /// Get the current theme based on the settings theme string.
    pub(super) fn get_theme(&self) -> WidgetTheme {
        WidgetTheme::from_name(&self.settings.theme)
    }

    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();

        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<WidgetEvent>();

        // Spawn the backend thread
        let endpoint = settings.endpoint.clone();
        thread::spawn(move || {
            run_backend(action_rx, event_tx, endpoint);
        });

        let controller = ChatController::new(
            action_tx.clone(),
            Duration::from_millis(settings.cooldown_ms),
            Duration::from_millis(settings.typing_interval_ms),
        );

        Self {
            controller,
            settings,
            action_tx,
            event_rx,
            input: InputState::new(),
        }
    }
}

impl Drop for WidgetApp {
    fn drop(&mut self) {
        // Stop the backend loop and persist settings on exit
        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Err(e) = save_settings(&self.settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

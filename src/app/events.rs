//! Backend event processing

use std::time::Instant;

use super::WidgetApp;

impl WidgetApp {
    /// Drain all pending events from the backend into the controller.
    pub(super) fn process_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.event_rx.try_recv() {
            self.controller.handle_event(event, now);
        }
    }
}

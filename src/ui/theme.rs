//! Color schemes for the widget, dark and light.

use eframe::egui::Color32;

/// Palette used by the panel, bubbles, and labels.
pub struct WidgetTheme {
    pub panel_fill: Color32,
    pub header_fill: Color32,
    pub input_fill: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub user_text: Color32,
    pub bot_text: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub border: Color32,
}

impl WidgetTheme {
    pub fn dark() -> Self {
        Self {
            panel_fill: Color32::from_rgb(24, 25, 30),
            header_fill: Color32::from_rgb(32, 34, 40),
            input_fill: Color32::from_rgb(32, 34, 40),
            user_bubble: Color32::from_rgb(58, 92, 170),
            bot_bubble: Color32::from_rgb(45, 45, 52),
            user_text: Color32::from_rgb(235, 238, 245),
            bot_text: Color32::from_rgb(220, 222, 228),
            text_primary: Color32::from_rgb(230, 232, 238),
            text_muted: Color32::from_rgb(140, 144, 155),
            accent: Color32::from_rgb(88, 133, 220),
            border: Color32::from_rgb(55, 58, 66),
        }
    }

    pub fn light() -> Self {
        Self {
            panel_fill: Color32::from_rgb(248, 248, 250),
            header_fill: Color32::from_rgb(238, 239, 243),
            input_fill: Color32::from_rgb(238, 239, 243),
            user_bubble: Color32::from_rgb(66, 103, 185),
            bot_bubble: Color32::from_rgb(226, 228, 233),
            user_text: Color32::WHITE,
            bot_text: Color32::from_rgb(40, 42, 48),
            text_primary: Color32::from_rgb(35, 37, 43),
            text_muted: Color32::from_rgb(120, 124, 135),
            accent: Color32::from_rgb(66, 103, 185),
            border: Color32::from_rgb(210, 212, 218),
        }
    }

    /// Resolve a persisted theme name ("dark" unless explicitly "light").
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

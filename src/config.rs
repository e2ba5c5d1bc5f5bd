use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";
pub const DEFAULT_COOLDOWN_MS: u64 = 3000;
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 50;

/// Persisted widget settings.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    /// Responder endpoint the backend POSTs to.
    pub endpoint: String,
    /// Minimum milliseconds between accepted submissions.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Milliseconds between revealed tokens of a bot reply.
    #[serde(default = "default_type_interval_ms")]
    pub typing_interval_ms: u64,
    /// "dark" or "light".
    #[serde(default)]
    pub theme: String,
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

fn default_type_interval_ms() -> u64 {
    DEFAULT_TYPE_INTERVAL_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            typing_interval_ms: DEFAULT_TYPE_INTERVAL_MS,
            theme: "dark".to_string(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "replybox", "replybox") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).unwrap();
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.cooldown_ms, 3000);
        assert_eq!(settings.typing_interval_ms, 50);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        // Older settings files carried only the endpoint
        let settings: Settings =
            serde_json::from_str(r#"{"endpoint":"http://example.test/chat"}"#).unwrap();
        assert_eq!(settings.endpoint, "http://example.test/chat");
        assert_eq!(settings.cooldown_ms, DEFAULT_COOLDOWN_MS);
        assert_eq!(settings.typing_interval_ms, DEFAULT_TYPE_INTERVAL_MS);
    }
}

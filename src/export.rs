//! Transcript export: serialize the conversation and write it as a
//! plain-text download.

use std::fs;
use std::path::{Path, PathBuf};

use crate::transcript::Transcript;

/// File name of the exported transcript.
pub const TRANSCRIPT_FILE_NAME: &str = "chat_transcript.txt";

/// Serialize every message unit in transcript order, one line each:
/// `"<text> Sent at HH:MM"`.
///
/// The "Chat started at" marker and the pending indicator are not message
/// units and are excluded. Embedded line breaks (the greeting) flatten to
/// spaces so each unit stays on one line.
pub fn export_transcript(transcript: &Transcript) -> String {
    transcript
        .entries()
        .iter()
        .map(|entry| {
            let text = entry.visible_text().replace('\n', " ");
            format!("{} {}", text, entry.timestamp_label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the serialized transcript into `dir`.
pub fn write_transcript_to(dir: &Path, transcript: &Transcript) -> Result<PathBuf, String> {
    let path = dir.join(TRANSCRIPT_FILE_NAME);
    fs::write(&path, export_transcript(transcript))
        .map_err(|e| format!("Failed to write transcript: {}", e))?;
    Ok(path)
}

/// Write the transcript to the user's download directory, falling back to
/// the current directory.
pub fn save_transcript(transcript: &Transcript) -> Result<PathBuf, String> {
    let dir = download_directory()?;
    write_transcript_to(&dir, transcript)
}

/// Resolve the platform download directory.
fn download_directory() -> Result<PathBuf, String> {
    if let Some(user_dirs) = directories::UserDirs::new() {
        if let Some(dir) = user_dirs.download_dir() {
            return Ok(dir.to_path_buf());
        }
    }
    std::env::current_dir().map_err(|e| format!("Failed to resolve a directory: {}", e))
}

//! UI rendering modules for the chat widget.
//!
//! - `messages`: transcript area (bubbles, timestamps, pending indicator)
//! - `theme`: color schemes
//! - `toasts`: floating status notifications

mod messages;
mod theme;
mod toasts;

pub use messages::*;
pub use theme::*;
pub use toasts::*;

//! Interactive TUI for stepping through a crack

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};

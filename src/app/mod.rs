//! Application shell.
//!
//! - `core`: `ConversationApp` struct and initialization
//! - `update`: the per-frame `eframe::App` implementation

pub mod core;
pub mod update;

pub use self::core::ConversationApp;

//! egui rendering for the conversation screen.
//!
//! - `messages`: the scrolling list and its rows
//! - `theme`: colour tokens, typography and the avatar primitive

pub mod messages;
pub mod theme;

pub use messages::{ConversationList, ListOutput};
pub use theme::Palette;

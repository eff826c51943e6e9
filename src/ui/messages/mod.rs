//! Conversation rendering: the scrolling list and its message rows.

pub mod body;
pub mod list;
pub mod row;
pub mod viewport;

pub use body::BodyLines;
pub use list::{ConversationList, ListOutput};
pub use viewport::{visible_window, RowHeights, Window};

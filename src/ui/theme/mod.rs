//! Colour tokens, typography and the avatar drawing primitive.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::{mix, Palette};
pub use fonts::{apply_app_style, body_small, configure_text_styles, font_for, title_small};
pub use widgets::{avatar_pattern, render_avatar, AVATAR_SIZE};

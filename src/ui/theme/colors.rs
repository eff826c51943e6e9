//! Colour tokens for the conversation screen.
//!
//! The palette follows a Material-like split: a `primary` accent, a
//! `secondary` colour used for author names and avatar borders, and two
//! message surfaces. `surface_expanded` is only a shade away from `surface`
//! so the expand transition reads as a subtle tint.

use eframe::egui::{Color32, Visuals};

use crate::config::ThemeChoice;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub dark_mode: bool,
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub surface_expanded: Color32,
    pub text_primary: Color32,
    pub shadow: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            primary: Color32::from_rgb(208, 188, 255),
            secondary: Color32::from_rgb(204, 194, 220),
            background: Color32::from_rgb(28, 27, 31),
            surface: Color32::from_rgb(43, 41, 48),
            surface_expanded: Color32::from_rgb(54, 51, 61),
            text_primary: Color32::from_rgb(230, 225, 229),
            shadow: Color32::from_black_alpha(60),
        }
    }

    pub fn light() -> Self {
        Self {
            dark_mode: false,
            primary: Color32::from_rgb(103, 80, 164),
            secondary: Color32::from_rgb(98, 91, 113),
            background: Color32::from_rgb(255, 251, 254),
            surface: Color32::from_rgb(243, 237, 247),
            surface_expanded: Color32::from_rgb(232, 222, 248),
            text_primary: Color32::from_rgb(28, 27, 31),
            shadow: Color32::from_black_alpha(25),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Base egui visuals for this palette.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.override_text_color = Some(self.text_primary);
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.4);
        visuals
    }

    /// Body surface colour for an expansion progress in `0.0..=1.0`.
    pub fn surface_at(&self, t: f32) -> Color32 {
        mix(self.surface, self.surface_expanded, t)
    }
}

/// Linear blend between two colours in sRGB space; `t` is clamped.
pub fn mix(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
    Color32::from_rgba_premultiplied(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
        channel(from.a(), to.a()),
    )
}

//! Color themes for the UI.

use crate::app::Theme;
use crate::graphics::Rgba;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Paper the plots are drawn on.
    pub canvas: Rgba,
    /// Border color.
    pub border: Color,
    /// Heading text color.
    pub heading: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
    /// Keymap bar background color.
    pub keymap_bg: Color,
    /// Indicator color while running.
    pub running: Color,
    /// Indicator color while paused.
    pub paused: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                canvas: Rgba::rgb(0.92, 0.86, 0.70),
                border: Color::Rgb(102, 92, 84),
                heading: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(235, 219, 178),
                keymap_bg: Color::Rgb(40, 40, 40),
                running: Color::Rgb(184, 187, 38),
                paused: Color::Rgb(250, 189, 47),
            },
            Theme::GruvboxLight => Self {
                canvas: Rgba::rgb(0.98, 0.96, 0.92),
                border: Color::Rgb(213, 196, 161),
                heading: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(60, 56, 54),
                keymap_bg: Color::Rgb(251, 245, 234),
                running: Color::Rgb(121, 116, 14),
                paused: Color::Rgb(181, 118, 20),
            },
        }
    }
}

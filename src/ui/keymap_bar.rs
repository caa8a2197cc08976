//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, paused: bool, colors: &ThemeColors) {
    let keymap_text = if paused {
        "q/Esc:quit | Space:resume | c:combined/services | T:theme"
    } else {
        "q/Esc:quit | Space:pause | c:combined/services | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.keymap_fg).bg(colors.keymap_bg));

    f.render_widget(paragraph, area);
}

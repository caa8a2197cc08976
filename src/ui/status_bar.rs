//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use crate::util::format_number;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (state, state_color) = if app.paused {
        (" PAUSED ", colors.paused)
    } else {
        (" RUNNING ", colors.running)
    };

    let line = Line::from(vec![
        Span::styled(
            state,
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "| tick {} | data intensity {:.1} | {} | {}",
            format_number(app.ticks()),
            app.data_intensity(),
            app.view.name(),
            app.status
        )),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

//! Plot canvas UI component.

use crate::app::App;
use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::graphics::BrailleSurface;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw both plots scaled into `area`.
pub fn draw_canvas(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Trafficview ")
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let mut surface =
        BrailleSurface::new(inner.width, inner.height, WINDOW_WIDTH, WINDOW_HEIGHT, colors.canvas);
    app.draw(&mut surface);
    f.render_widget(&surface, inner);
}

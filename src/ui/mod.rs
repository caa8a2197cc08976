//! User interface rendering.

mod canvas;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::error::Result;
use ratatui::{
    backend::TestBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    canvas::draw_canvas(f, chunks[0], app, &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.paused, &colors);
}

/// Render one frame of `cols` x `rows` cells off-screen and return its text,
/// one line per row with trailing blanks removed.
pub fn snapshot(app: &App, cols: u16, rows: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(cols, rows))?;
    terminal.draw(|f| draw(f, app))?;

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let line: String = (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn app() -> App {
        let config = SimulationConfig {
            duration_seconds: 40,
            seed: Some(9),
            ..Default::default()
        };
        let mut app = App::new(config).unwrap();
        app.on_tick().unwrap();
        app
    }

    #[test]
    fn test_snapshot_has_requested_size() {
        let text = snapshot(&app(), 100, 40).unwrap();
        assert_eq!(text.lines().count(), 40);
        assert!(text.lines().all(|l| l.chars().count() <= 100));
    }

    #[test]
    fn test_snapshot_shows_bars_and_plots() {
        let text = snapshot(&app(), 160, 60).unwrap();
        assert!(text.contains("Trafficview"));
        assert!(text.contains("RUNNING"));
        assert!(text.contains("tick 1"));
        assert!(text.contains("Space:pause"));
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }

    #[test]
    fn test_paused_status() {
        let mut app = app();
        app.toggle_pause();
        let text = snapshot(&app, 80, 24).unwrap();
        assert!(text.contains("PAUSED"));
        assert!(text.contains("Space:resume"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        assert!(snapshot(&app(), 2, 2).is_ok());
    }
}

//! Trafficview - live plots of synthetic network traffic in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use trafficview::app::App;
use trafficview::config::SimulationConfig;
use trafficview::{ui, TrafficViewError};

#[derive(Parser, Debug)]
#[command(name = "trafficview")]
#[command(about = "Live plots of synthetic data, voice and video traffic", long_about = None)]
struct Args {
    /// Seconds of traffic generated per tick
    #[arg(long, default_value_t = 7000)]
    duration: usize,

    /// Terminals whose arrivals are summed
    #[arg(long, default_value_t = 1)]
    terminals: usize,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Seed for reproducible traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print one frame of COLSxROWS cells to stdout instead of running interactively
    #[arg(long, value_name = "COLSxROWS", value_parser = parse_size)]
    snapshot: Option<(u16, u16)>,
}

impl Args {
    fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            duration_seconds: self.duration,
            terminals: self.terminals,
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            ..Default::default()
        }
    }
}

fn parse_size(s: &str) -> std::result::Result<(u16, u16), String> {
    let (cols, rows) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected COLSxROWS, got '{}'", s))?;
    let cols: u16 = cols.trim().parse().map_err(|e| format!("invalid columns: {}", e))?;
    let rows: u16 = rows.trim().parse().map_err(|e| format!("invalid rows: {}", e))?;
    if cols == 0 || rows == 0 {
        return Err("size must be non-zero".to_string());
    }
    Ok((cols, rows))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Trafficview");
    }

    let mut app = App::new(args.simulation_config())?;
    app.on_tick()?;

    if let Some((cols, rows)) = args.snapshot {
        print!("{}", ui::snapshot(&app, cols, rows)?);
        tracing::info!(cols, rows, "Snapshot printed");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().map_err(|e| TrafficViewError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Trafficview exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick = app.config().tick;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    (_, KeyCode::Esc)
                    | (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => app.toggle_pause(),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.toggle_view(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T'))
                    | (KeyModifiers::NONE, KeyCode::Char('T')) => app.cycle_theme(),
                    _ => {},
                }
            }
        }

        if last_tick.elapsed() >= tick {
            app.on_tick()?;
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("80x24"), Ok((80, 24)));
        assert_eq!(parse_size("120X40"), Ok((120, 40)));
        assert!(parse_size("80").is_err());
        assert!(parse_size("0x10").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_args_map_to_config() {
        let args = Args::parse_from(["trafficview", "--duration", "50", "--tick-ms", "250", "--seed", "3"]);
        let config = args.simulation_config();
        assert_eq!(config.duration_seconds, 50);
        assert_eq!(config.tick, Duration::from_millis(250));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.terminals, 1);
    }
}

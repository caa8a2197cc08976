//! Application state and logic.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::graphics::{DashPattern, Rgba, Surface};
use crate::plot::{CurveStyle, Frame, Plot};
use crate::traffic::{self, Service, ServiceParameters};

/// Where the traffic plot sits in the virtual window.
pub const TRAFFIC_FRAME: Frame = Frame::new(10, 10, 620, 200);
/// Where the statistics plot sits in the virtual window.
pub const STATISTICS_FRAME: Frame = Frame::new(10, 220, 620, 200);

const CURVE_WIDTH: f32 = 1.2;
const DATA_COLOR: Rgba = Rgba::rgb(0.88, 0.11, 0.23);
const STATISTICS_COLOR: Rgba = Rgba::rgb(0.88, 0.15, 0.35);
const COMBINED_CURVE: &str = "combined";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// What the lower plot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficView {
    /// One curve per service.
    Services,
    /// The weighted sum of all services.
    Combined,
}

impl TrafficView {
    /// The other view.
    pub fn toggled(self) -> Self {
        match self {
            TrafficView::Services => TrafficView::Combined,
            TrafficView::Combined => TrafficView::Services,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            TrafficView::Services => "per service",
            TrafficView::Combined => "combined",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    config: SimulationConfig,
    services: BTreeMap<Service, ServiceParameters>,
    traffic: BTreeMap<Service, Vec<f64>>,
    traffic_plot: Plot,
    combined_plot: Plot,
    statistics_plot: Plot,
    rng: StdRng,
    ticks: u64,
    /// Whether ticks are ignored.
    pub paused: bool,
    /// Lower plot content.
    pub view: TrafficView,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create the application with empty curves.
    ///
    /// Fails when `config` does not validate.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut traffic_plot = Plot::new(TRAFFIC_FRAME);
        for service in Service::ALL {
            traffic_plot.add_curve(service.name(), curve_style(service))?;
        }
        let mut combined_plot = Plot::new(TRAFFIC_FRAME);
        combined_plot.add_curve(COMBINED_CURVE, curve_style(Service::Data))?;
        let mut statistics_plot = Plot::new(STATISTICS_FRAME);
        statistics_plot.add_curve(
            Service::Data.name(),
            CurveStyle::new(STATISTICS_COLOR, CURVE_WIDTH),
        )?;

        tracing::info!(
            duration = config.duration_seconds,
            terminals = config.terminals,
            seeded = config.seed.is_some(),
            "Simulation created"
        );

        Ok(Self {
            config,
            services: traffic::default_services(),
            traffic: BTreeMap::new(),
            traffic_plot,
            combined_plot,
            statistics_plot,
            rng,
            ticks: 0,
            paused: false,
            view: TrafficView::Services,
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
        })
    }

    /// Configuration the application runs with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of ticks that generated traffic.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current parameters of `service`.
    pub fn parameters(&self, service: Service) -> Option<&ServiceParameters> {
        self.services.get(&service)
    }

    /// Latest series of `service`; empty before the first tick.
    pub fn traffic(&self, service: Service) -> &[f64] {
        self.traffic
            .get(&service)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Plot of the per-service series.
    pub fn traffic_plot(&self) -> &Plot {
        &self.traffic_plot
    }

    /// Plot of the combined load.
    pub fn combined_plot(&self) -> &Plot {
        &self.combined_plot
    }

    /// Plot of the data service histogram.
    pub fn statistics_plot(&self) -> &Plot {
        &self.statistics_plot
    }

    /// Advance the simulation by one tick.
    ///
    /// Regenerates every service, raises the data intensity and refreshes all
    /// curves. Does nothing while paused.
    pub fn on_tick(&mut self) -> Result<()> {
        if self.paused {
            return Ok(());
        }

        let SimulationConfig {
            duration_seconds,
            terminals,
            intensity_step,
            histogram_bins,
            ..
        } = self.config;

        for (service, params) in &self.services {
            let series = traffic::generate(
                &mut self.rng,
                params.intensity,
                duration_seconds,
                terminals,
            );
            self.traffic.insert(*service, series);
        }
        if let Some(data) = self.services.get_mut(&Service::Data) {
            data.intensity += intensity_step;
        }

        for (service, series) in &self.traffic {
            self.traffic_plot
                .update_curve(service.name(), series.clone())?;
        }
        let counts = traffic::histogram(self.traffic(Service::Data), histogram_bins);
        self.statistics_plot
            .update_curve(Service::Data.name(), counts)?;
        let load = traffic::combine(&self.traffic, &self.services);
        self.combined_plot.update_curve(COMBINED_CURVE, load)?;

        self.ticks += 1;
        tracing::trace!(
            tick = self.ticks,
            data_intensity = self.data_intensity(),
            "Traffic regenerated"
        );
        Ok(())
    }

    /// Intensity the data service will be generated with next.
    pub fn data_intensity(&self) -> f64 {
        self.parameters(Service::Data)
            .map_or(0.0, |p| p.intensity)
    }

    /// Draw both plots onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.statistics_plot
            .draw(surface, "N occurrences", "intensity", 10);
        let plot = match self.view {
            TrafficView::Services => &self.traffic_plot,
            TrafficView::Combined => &self.combined_plot,
        };
        plot.draw(surface, "intensity", "time", 4);
    }

    /// Toggle pause.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.status = if self.paused {
            "Paused".to_string()
        } else {
            "Resumed".to_string()
        };
        tracing::info!(paused = self.paused, "Pause toggled");
    }

    /// Switch between per-service and combined traffic.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        self.status = format!("View: {}", self.view.name());
        tracing::info!(view = self.view.name(), "View toggled");
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
        tracing::info!(theme = self.theme.name(), "Theme changed");
    }
}

fn curve_style(service: Service) -> CurveStyle {
    match service {
        Service::Data => CurveStyle::new(DATA_COLOR, CURVE_WIDTH),
        Service::Voice => CurveStyle::new(Rgba::BLACK, CURVE_WIDTH).with_dash(DashPattern::DOTTED),
        Service::Video => CurveStyle::new(Rgba::BLACK, CURVE_WIDTH).with_dash(DashPattern::DASHED),
    }
}

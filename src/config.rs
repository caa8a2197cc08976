//! Configuration for the simulation loop and plot styling.

use std::time::Duration;

use crate::error::{Result, TrafficViewError};
use crate::graphics::Rgba;

/// Width of the virtual drawing window.
pub const WINDOW_WIDTH: f32 = 640.0;
/// Height of the virtual drawing window.
pub const WINDOW_HEIGHT: f32 = 480.0;

/// Configuration for traffic generation and the tick loop.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Samples (seconds) per generated series.
    pub duration_seconds: usize,
    /// Terminals whose arrivals are summed per sample.
    pub terminals: usize,
    /// Interval between ticks.
    pub tick: Duration,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Added to the data service intensity on every unpaused tick.
    pub intensity_step: f64,
    /// Number of unit-width bins in the statistics histogram.
    pub histogram_bins: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 7000,
            terminals: 1,
            tick: Duration::from_millis(100),
            seed: None,
            intensity_step: 0.1,
            histogram_bins: 100,
        }
    }
}

impl SimulationConfig {
    /// Reject settings the tick loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.duration_seconds == 0 {
            return Err(TrafficViewError::invalid_config("duration must be at least 1 second"));
        }
        if self.terminals == 0 {
            return Err(TrafficViewError::invalid_config("at least one terminal is required"));
        }
        if self.tick.is_zero() {
            return Err(TrafficViewError::invalid_config("tick interval must be positive"));
        }
        if self.histogram_bins == 0 {
            return Err(TrafficViewError::invalid_config("histogram needs at least one bin"));
        }
        if !self.intensity_step.is_finite() {
            return Err(TrafficViewError::invalid_config("intensity step must be finite"));
        }
        Ok(())
    }
}

/// Styling of the plot chrome: margins, background, axes and labels.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Space reserved left of the inner rectangle for the vertical label.
    pub left_margin: f32,
    /// Space reserved below the inner rectangle for the horizontal label.
    pub bottom_margin: f32,
    /// Inner rectangle fill.
    pub background: Rgba,
    /// Border and gridline color.
    pub grid_color: Rgba,
    /// Border and gridline width.
    pub grid_width: f32,
    /// Axis and label color.
    pub axis_color: Rgba,
    /// Axis width.
    pub axis_width: f32,
    /// Length of the arrowhead along its axis.
    pub arrow_length: f32,
    /// Half of the arrowhead's base.
    pub arrow_half_width: f32,
    /// How far each axis line stops short of its arrow tip.
    pub axis_inset: f32,
    /// Stroke width and size of the axis labels.
    pub label_font: (f32, f32),
    /// Stroke width and size of gridline values.
    pub tick_font: (f32, f32),
    /// Stroke width and size of the horizontal endpoint values.
    pub endpoint_font: (f32, f32),
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            left_margin: 10.0,
            bottom_margin: 15.0,
            background: Rgba::grey(0.98),
            grid_color: Rgba::grey(0.75),
            grid_width: 0.7,
            axis_color: Rgba::grey(0.1),
            axis_width: 1.2,
            arrow_length: 5.0,
            arrow_half_width: 2.1,
            axis_inset: 4.0,
            label_font: (1.8, 0.7),
            tick_font: (1.2, 0.4),
            endpoint_font: (1.2, 0.5),
        }
    }
}

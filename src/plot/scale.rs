//! Shared axis scale across all curves of a plot.

use super::curve::Curve;
use super::frame::InnerRect;
use crate::graphics::Point;

/// Largest sample value and longest series over every curve in a plot.
///
/// All curves of a plot are mapped with the same scale, so series of different
/// length and magnitude can be compared directly. Shorter series stop early on
/// the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scale {
    /// Maximum sample across non-empty curves, 0 when there is none.
    pub max: f64,
    /// Longest series length, 0 when every curve is empty.
    pub len: usize,
}

impl Scale {
    /// Compute the scale of `curves`.
    pub fn from_curves<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> Self {
        let mut max: Option<f64> = None;
        let mut len = 0;
        for curve in curves {
            len = len.max(curve.data().len());
            if let Some(curve_max) = curve.max() {
                max = Some(max.map_or(curve_max, |m| m.max(curve_max)));
            }
        }
        Scale {
            max: max.unwrap_or(0.0),
            len,
        }
    }

    /// Horizontal distance between consecutive samples; 0 when there are none.
    pub fn step_x(&self, width: f32) -> f32 {
        if self.len == 0 {
            0.0
        } else {
            width / self.len as f32
        }
    }

    /// Vertical distance per unit of value; 0 when the maximum is not positive,
    /// which draws every curve flat on the baseline.
    pub fn step_y(&self, height: f32) -> f32 {
        if self.max > 0.0 && self.max.is_finite() {
            (f64::from(height) / self.max) as f32
        } else {
            0.0
        }
    }

    /// Map sample `index` with `value` into `inner`.
    pub fn map(&self, inner: &InnerRect, index: usize, value: f64) -> Point {
        let step_x = self.step_x(inner.width);
        let step_y = self.step_y(inner.height);
        Point::new(
            inner.x + step_x / 2.0 + step_x * index as f32,
            inner.y + step_y * value as f32,
        )
    }

    /// Value annotated beside gridline `line` (0-based) of `lines`.
    pub fn tick_value(&self, line: usize, lines: usize) -> f64 {
        if lines == 0 {
            return 0.0;
        }
        self.max / lines as f64 * (line + 1) as f64
    }
}

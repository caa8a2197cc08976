//! Named, independently styled data series.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, TrafficViewError};
use crate::graphics::{DashPattern, Rgba};

static NEXT_STORE: AtomicUsize = AtomicUsize::new(0);

/// Handle to a curve, valid for the plot that returned it (and its clones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveId {
    store: usize,
    index: usize,
}

impl CurveId {
    /// Position of the curve in registration order.
    pub fn index(self) -> usize {
        self.index
    }
}

/// Visual style fixed when a curve is registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width.
    pub width: f32,
    /// Stipple mask.
    pub dash: DashPattern,
}

impl CurveStyle {
    /// Solid stroke of the given color and width.
    pub fn new(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: DashPattern::SOLID,
        }
    }

    /// Replace the stipple mask.
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }
}

/// A named time series drawn inside a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    name: String,
    data: Vec<f64>,
    style: CurveStyle,
}

impl Curve {
    /// Curve name, unique within its plot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current samples.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Style captured at registration.
    pub fn style(&self) -> &CurveStyle {
        &self.style
    }

    /// Largest sample, ignoring NaN; `None` when there are no samples.
    pub fn max(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }
}

/// Curves of one plot, kept in registration order.
#[derive(Debug, Clone)]
pub struct CurveStore {
    tag: usize,
    curves: Vec<Curve>,
    by_name: HashMap<String, CurveId>,
}

impl Default for CurveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tag: NEXT_STORE.fetch_add(1, Ordering::Relaxed),
            curves: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a curve with no data.
    ///
    /// A name that is already registered is rejected and the existing curve is
    /// left untouched.
    pub fn add(&mut self, name: &str, style: CurveStyle) -> Result<CurveId> {
        if self.by_name.contains_key(name) {
            return Err(TrafficViewError::duplicate_curve(name));
        }
        let id = CurveId {
            store: self.tag,
            index: self.curves.len(),
        };
        self.curves.push(Curve {
            name: name.to_string(),
            data: Vec::new(),
            style,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a handle by name.
    pub fn id(&self, name: &str) -> Option<CurveId> {
        self.by_name.get(name).copied()
    }

    /// Curve by name.
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.id(name).and_then(|id| self.by_id(id))
    }

    /// Curve by handle; `None` for a handle issued by another store.
    pub fn by_id(&self, id: CurveId) -> Option<&Curve> {
        if id.store != self.tag {
            return None;
        }
        self.curves.get(id.index)
    }

    /// Replace a curve's samples wholesale.
    ///
    /// Returns `None` and changes nothing for a handle issued by another store.
    pub fn replace_data(&mut self, id: CurveId, data: Vec<f64>) -> Option<()> {
        if id.store != self.tag {
            return None;
        }
        let curve = self.curves.get_mut(id.index)?;
        curve.data = data;
        Some(())
    }

    /// Curves in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Curve> + '_ {
        self.curves.iter()
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether no curve is registered.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

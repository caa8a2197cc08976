//! Multi-curve plots.
//!
//! A [`Plot`] owns a [`Frame`], a set of named curves and the shared [`Scale`]
//! derived from them. Curves are registered once with an explicit style and
//! then have their data replaced as new samples arrive; the scale is
//! recomputed on every update so a draw never sees stale extrema.

mod curve;
mod frame;
mod render;
mod scale;

pub use curve::{Curve, CurveId, CurveStore, CurveStyle};
pub use frame::{Frame, InnerRect};
pub use scale::Scale;

use crate::config::PlotStyle;
use crate::error::{Result, TrafficViewError};

/// A bounded region rendering curves on one shared scale.
#[derive(Debug, Clone)]
pub struct Plot {
    frame: Frame,
    style: PlotStyle,
    curves: CurveStore,
    scale: Scale,
}

impl Plot {
    /// Create an empty plot with the default chrome.
    pub fn new(frame: Frame) -> Self {
        Self::with_style(frame, PlotStyle::default())
    }

    /// Create an empty plot with custom chrome.
    pub fn with_style(frame: Frame, style: PlotStyle) -> Self {
        Self {
            frame,
            style,
            curves: CurveStore::new(),
            scale: Scale::default(),
        }
    }

    /// The plot rectangle.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The current shared scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Curve by name.
    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    /// Curves in registration order, which is also drawing order.
    pub fn curves(&self) -> impl Iterator<Item = &Curve> + '_ {
        self.curves.iter()
    }

    /// Register an empty curve drawn with `style`.
    ///
    /// Fails with [`TrafficViewError::DuplicateCurve`] when `name` is taken;
    /// the existing curve keeps its data and style.
    pub fn add_curve(&mut self, name: &str, style: CurveStyle) -> Result<CurveId> {
        match self.curves.add(name, style) {
            Ok(id) => {
                tracing::debug!(curve = name, "Registered curve");
                self.rescale();
                Ok(id)
            },
            Err(e) => {
                tracing::warn!("Rejected curve registration: {}", e);
                Err(e)
            },
        }
    }

    /// Replace the samples of the named curve.
    ///
    /// Fails with [`TrafficViewError::UnknownCurve`] and changes nothing when
    /// no curve has that name.
    pub fn update_curve(&mut self, name: &str, data: Vec<f64>) -> Result<()> {
        let Some(id) = self.curves.id(name) else {
            tracing::warn!(curve = name, "Update for unknown curve ignored");
            return Err(TrafficViewError::unknown_curve(name));
        };
        self.update_curve_by_id(id, data)
    }

    /// Replace the samples of the curve behind `id`.
    ///
    /// `id` must come from [`Plot::add_curve`] on this plot (or a plot it was
    /// cloned from); a handle from any other plot fails with
    /// [`TrafficViewError::ForeignCurveId`] and changes nothing.
    pub fn update_curve_by_id(&mut self, id: CurveId, data: Vec<f64>) -> Result<()> {
        let len = data.len();
        if self.curves.replace_data(id, data).is_none() {
            tracing::warn!(index = id.index(), "Update with foreign curve handle ignored");
            return Err(TrafficViewError::ForeignCurveId { index: id.index() });
        }
        self.rescale();
        tracing::trace!(samples = len, max = self.scale.max, "Curve updated");
        Ok(())
    }

    fn rescale(&mut self) {
        self.scale = Scale::from_curves(self.curves.iter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{Command, DashPattern, RecordingSurface, Rgba, StrokeKind, Surface};

    fn plot() -> Plot {
        Plot::new(Frame::new(10, 10, 620, 200))
    }

    fn style() -> CurveStyle {
        CurveStyle::new(Rgba::rgb(0.88, 0.11, 0.23), 1.2)
    }

    #[test]
    fn test_shared_scale_over_heterogeneous_curves() {
        let mut plot = plot();
        plot.add_curve("a", style()).unwrap();
        plot.add_curve("b", style()).unwrap();
        plot.update_curve("a", vec![1.0, 10.0, 4.0, 2.0, 0.0]).unwrap();
        plot.update_curve("b", vec![3.0, 1.0, 2.0, 0.0, 1.0, 2.0, 3.0, 1.0])
            .unwrap();

        assert_eq!(plot.scale(), Scale { max: 10.0, len: 8 });
    }

    #[test]
    fn test_update_replaces_data_and_rescales() {
        let mut plot = plot();
        plot.add_curve("x", style()).unwrap();
        plot.update_curve("x", vec![1.0, 2.0, 3.0]).unwrap();
        plot.update_curve("x", vec![4.0, 5.0]).unwrap();

        assert_eq!(plot.curve("x").unwrap().data(), &[4.0, 5.0]);
        assert_eq!(plot.scale().len, 2);
        assert_eq!(plot.scale().max, 5.0);
    }

    #[test]
    fn test_update_unknown_curve_changes_nothing() {
        let mut plot = plot();
        plot.add_curve("a", style()).unwrap();
        plot.update_curve("a", vec![2.0, 7.0]).unwrap();
        let before = plot.scale();

        let err = plot.update_curve("missing", vec![100.0; 50]).unwrap_err();
        assert!(matches!(err, TrafficViewError::UnknownCurve { .. }));
        assert_eq!(plot.scale(), before);
        assert_eq!(plot.curve("a").unwrap().data(), &[2.0, 7.0]);
        assert!(plot.curve("missing").is_none());
    }

    #[test]
    fn test_duplicate_add_keeps_original_style() {
        let mut plot = plot();
        plot.add_curve("a", style()).unwrap();
        let dashed = CurveStyle::new(Rgba::BLACK, 3.0).with_dash(DashPattern::DASHED);
        assert!(plot.add_curve("a", dashed).is_err());
        assert_eq!(plot.curve("a").unwrap().style(), &style());
        assert_eq!(plot.curves().count(), 1);
    }

    #[test]
    fn test_update_by_id() {
        let mut plot = plot();
        let id = plot.add_curve("a", style()).unwrap();
        plot.update_curve_by_id(id, vec![9.0]).unwrap();
        assert_eq!(plot.scale(), Scale { max: 9.0, len: 1 });
    }

    #[test]
    fn test_update_by_id_from_other_plot_rejected() {
        let mut traffic = plot();
        let mut statistics = plot();
        let foreign = traffic.add_curve("a", style()).unwrap();
        statistics.add_curve("a", style()).unwrap();
        statistics.update_curve("a", vec![1.0, 2.0]).unwrap();

        let err = statistics
            .update_curve_by_id(foreign, vec![50.0; 10])
            .unwrap_err();
        assert!(matches!(err, TrafficViewError::ForeignCurveId { index: 0 }));
        assert_eq!(statistics.curve("a").unwrap().data(), &[1.0, 2.0]);
        assert_eq!(statistics.scale(), Scale { max: 2.0, len: 2 });
    }

    #[test]
    fn test_styles_are_independent_per_curve() {
        let mut plot = plot();
        plot.add_curve("solid", style()).unwrap();
        plot.add_curve(
            "dotted",
            CurveStyle::new(Rgba::BLACK, 1.2).with_dash(DashPattern::DOTTED),
        )
        .unwrap();
        plot.update_curve("solid", vec![1.0, 2.0]).unwrap();
        plot.update_curve("dotted", vec![2.0, 1.0]).unwrap();

        let mut surface = RecordingSurface::new();
        plot.draw(&mut surface, "v", "h", 0);
        let strips: Vec<_> = surface
            .strokes(StrokeKind::Strip)
            .into_iter()
            .filter_map(|c| match c {
                Command::Stroke { dash, color, .. } => Some((*dash, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            strips,
            [
                (DashPattern::SOLID, Rgba::rgb(0.88, 0.11, 0.23)),
                (DashPattern::DOTTED, Rgba::BLACK),
            ]
        );
        assert_eq!(surface.color(), Rgba::WHITE);
    }
}

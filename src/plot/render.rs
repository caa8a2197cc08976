//! Drawing a plot onto a surface.

use super::{InnerRect, Plot};
use crate::graphics::{
    render_text, Align, AmbientGuard, DashPattern, Point, StrokeKind, Surface,
};
use crate::util::format_value;

impl Plot {
    /// Draw the plot: background, gridlines, every curve, axes with arrows,
    /// axis labels, gridline values and the horizontal endpoints.
    ///
    /// Does nothing when no curve is registered. Curves without samples are
    /// skipped. The surface's ambient color and line width are the same after
    /// the call as before it.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        vertical_label: &str,
        horizontal_label: &str,
        grid_lines: usize,
    ) {
        if self.curves.is_empty() {
            return;
        }

        let inner = self
            .frame
            .inner(self.style.left_margin, self.style.bottom_margin);
        let mut surface = AmbientGuard::new(surface);

        self.draw_background(&mut *surface, &inner, grid_lines);
        self.draw_curves(&mut *surface, &inner);
        self.draw_axes(&mut *surface, &inner);
        self.draw_annotations(
            &mut *surface,
            &inner,
            vertical_label,
            horizontal_label,
            grid_lines,
        );
    }

    fn draw_background<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        inner: &InnerRect,
        grid_lines: usize,
    ) {
        let outline = [
            Point::new(inner.x, inner.y),
            Point::new(inner.x, inner.top()),
            Point::new(inner.right(), inner.top()),
            Point::new(inner.right(), inner.y),
        ];
        surface.set_color(self.style.background);
        surface.fill_polygon(&outline);

        surface.set_line_width(self.style.grid_width);
        surface.set_color(self.style.grid_color);
        surface.stroke(StrokeKind::Loop, &outline, DashPattern::SOLID);

        if grid_lines == 0 {
            return;
        }
        let gap = inner.height / grid_lines as f32;
        let lines: Vec<Point> = (1..=grid_lines)
            .flat_map(|i| {
                let y = inner.y + gap * i as f32;
                [Point::new(inner.x, y), Point::new(inner.right(), y)]
            })
            .collect();
        surface.stroke(StrokeKind::Segments, &lines, DashPattern::SOLID);
    }

    fn draw_curves<S: Surface + ?Sized>(&self, surface: &mut S, inner: &InnerRect) {
        for curve in self.curves.iter() {
            if curve.data().is_empty() {
                continue;
            }
            let style = curve.style();
            surface.set_color(style.color);
            surface.set_line_width(style.width);
            let points: Vec<Point> = curve
                .data()
                .iter()
                .enumerate()
                .map(|(i, &v)| self.scale.map(inner, i, v))
                .collect();
            surface.stroke(StrokeKind::Strip, &points, style.dash);
        }
    }

    fn draw_axes<S: Surface + ?Sized>(&self, surface: &mut S, inner: &InnerRect) {
        let style = &self.style;
        let (x, y) = (inner.x, inner.y);
        let (right, top) = (inner.right(), inner.top());

        surface.set_line_width(style.axis_width);
        surface.set_color(style.axis_color);
        surface.stroke(
            StrokeKind::Segments,
            &[
                Point::new(x, y),
                Point::new(x, top - style.axis_inset),
                Point::new(x, y),
                Point::new(right - style.axis_inset, y),
            ],
            DashPattern::SOLID,
        );

        let (len, half) = (style.arrow_length, style.arrow_half_width);
        surface.fill_polygon(&[
            Point::new(x - half, top - len),
            Point::new(x, top),
            Point::new(x + half, top - len),
        ]);
        surface.fill_polygon(&[
            Point::new(right - len, y - half),
            Point::new(right, y),
            Point::new(right - len, y + half),
        ]);
    }

    fn draw_annotations<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        inner: &InnerRect,
        vertical_label: &str,
        horizontal_label: &str,
        grid_lines: usize,
    ) {
        let style = &self.style;
        surface.set_color(style.axis_color);

        let (stroke, size) = style.label_font;
        render_text(
            surface,
            vertical_label,
            self.frame.x() as f32,
            inner.y + inner.height / 2.0,
            90.0,
            stroke,
            size,
            Align::H_CENTER | Align::V_UP,
        );
        render_text(
            surface,
            horizontal_label,
            inner.x + inner.width / 2.0,
            self.frame.y() as f32,
            0.0,
            stroke,
            size,
            Align::H_CENTER | Align::V_DOWN,
        );

        if grid_lines > 0 {
            let (stroke, size) = style.tick_font;
            let gap = inner.height / grid_lines as f32;
            for line in 0..grid_lines {
                let value = self.scale.tick_value(line, grid_lines);
                render_text(
                    surface,
                    &format_value(value),
                    inner.x + 4.0,
                    inner.y + gap * (line + 1) as f32,
                    0.0,
                    stroke,
                    size,
                    Align::H_LEFT | Align::V_CENTER | Align::HIGHLIGHT,
                );
            }
        }

        let (stroke, size) = style.endpoint_font;
        let endpoints = [(inner.x, "0".to_string()), (inner.right(), self.scale.len.to_string())];
        for (x, text) in endpoints {
            render_text(
                surface,
                &text,
                x,
                inner.y - 3.0,
                0.0,
                stroke,
                size,
                Align::H_CENTER | Align::V_UP,
            );
        }
    }
}

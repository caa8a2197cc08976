//! Terminal drawing surface built from braille dots.
//!
//! The surface keeps a virtual y-up coordinate space (by default the 640x480
//! window of the plots) and maps it onto a grid of terminal cells, each holding
//! 2x4 braille dots. Strokes set dots, fills tint cell backgrounds, and glyphs
//! occupy whole cells on a text layer drawn above the dots.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{dash_segments_in, DashPattern, GlyphPlacement, Point, Rgba, StrokeKind, Surface};

/// Dot bit for (row, column) inside one braille cell.
const BRAILLE_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];
const BRAILLE_BASE: u32 = 0x2800;

/// Braille-dot rendering of a virtual drawing area.
#[derive(Debug, Clone)]
pub struct BrailleSurface {
    cols: u16,
    rows: u16,
    width: f32,
    height: f32,
    color: Rgba,
    line_width: f32,
    dots: Vec<u8>,
    fg: Vec<Rgba>,
    bg: Vec<Rgba>,
    text: Vec<Option<(char, Rgba)>>,
}

impl BrailleSurface {
    /// Create a surface of `cols` x `rows` cells showing the virtual area
    /// `width` x `height`, cleared to `clear`.
    pub fn new(cols: u16, rows: u16, width: f32, height: f32, clear: Rgba) -> Self {
        let cells = usize::from(cols) * usize::from(rows);
        Self {
            cols,
            rows,
            width: width.max(1.0),
            height: height.max(1.0),
            color: Rgba::BLACK,
            line_width: 1.0,
            dots: vec![0; cells],
            fg: vec![Rgba::BLACK; cells],
            bg: vec![clear; cells],
            text: vec![None; cells],
        }
    }

    /// Size in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Character shown in a cell: a glyph, a braille pattern, or a space.
    pub fn symbol(&self, col: u16, row: u16) -> char {
        let Some(idx) = self.index(col, row) else {
            return ' ';
        };
        if let Some((ch, _)) = self.text[idx] {
            return ch;
        }
        match self.dots[idx] {
            0 => ' ',
            bits => char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' '),
        }
    }

    /// Background color of a cell.
    pub fn background(&self, col: u16, row: u16) -> Option<Rgba> {
        self.index(col, row).map(|idx| self.bg[idx])
    }

    /// Foreground color of a cell.
    pub fn foreground(&self, col: u16, row: u16) -> Option<Rgba> {
        let idx = self.index(col, row)?;
        Some(match self.text[idx] {
            Some((_, color)) => color,
            None => self.fg[idx],
        })
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows)
            .then(|| usize::from(row) * usize::from(self.cols) + usize::from(col))
    }

    fn dot_extent(&self) -> (f32, f32) {
        (f32::from(self.cols) * 2.0, f32::from(self.rows) * 4.0)
    }

    /// Virtual point to fractional dot coordinates, row 0 at the top.
    fn to_dot(&self, p: Point) -> (f32, f32) {
        let (dot_w, dot_h) = self.dot_extent();
        (
            p.x / self.width * dot_w,
            (1.0 - p.y / self.height) * dot_h,
        )
    }

    /// Virtual point at the middle of a dot.
    fn dot_center(&self, dx: usize, dy: usize) -> Point {
        let (dot_w, dot_h) = self.dot_extent();
        Point::new(
            (dx as f32 + 0.5) / dot_w * self.width,
            (1.0 - (dy as f32 + 0.5) / dot_h) * self.height,
        )
    }

    fn set_dot(&mut self, dx: f32, dy: f32, color: Rgba) {
        if !(dx.is_finite() && dy.is_finite()) || dx < 0.0 || dy < 0.0 {
            return;
        }
        let (dx, dy) = (dx as usize, dy as usize);
        let (col, row) = (dx / 2, dy / 4);
        if col >= usize::from(self.cols) || row >= usize::from(self.rows) {
            return;
        }
        let idx = row * usize::from(self.cols) + col;
        self.dots[idx] |= BRAILLE_BITS[dy % 4][dx % 2];
        self.fg[idx] = color.over(self.bg[idx]);
    }

    fn draw_line(&mut self, a: Point, b: Point) {
        let (x0, y0) = self.to_dot(a);
        let (x1, y1) = self.to_dot(b);
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return;
        }
        let (dot_w, dot_h) = self.dot_extent();
        let max_steps = 4.0 * (dot_w + dot_h);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().min(max_steps);
        let color = self.color;
        if steps < 1.0 {
            self.set_dot(x0, y0, color);
            return;
        }
        let n = steps as usize;
        for i in 0..=n {
            let t = i as f32 / steps;
            self.set_dot(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, color);
        }
    }
}

/// Crossing-number test; works for any simple polygon.
fn contains(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn polygon_area(polygon: &[Point]) -> f32 {
    let mut twice = 0.0;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        twice += (polygon[j].x + polygon[i].x) * (polygon[j].y - polygon[i].y);
        j = i;
    }
    (twice / 2.0).abs()
}

impl Surface for BrailleSurface {
    fn color(&self) -> Rgba {
        self.color
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    // Recorded only; a terminal cell cannot show sub-cell stroke widths.
    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        if points.len() < 3 || !points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
            return;
        }

        let cell_area =
            (self.width / f32::from(self.cols.max(1))) * (self.height / f32::from(self.rows.max(1)));
        let (min_x, max_x, min_y, max_y) = points.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, f32::NEG_INFINITY),
            |(x0, x1, y0, y1), p| (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)),
        );
        let (dx0, dy1) = self.to_dot(Point::new(min_x, min_y));
        let (dx1, dy0) = self.to_dot(Point::new(max_x, max_y));
        let (dot_w, dot_h) = self.dot_extent();
        let xs = dx0.floor().max(0.0) as usize..(dx1.ceil().min(dot_w)).max(0.0) as usize;
        let ys = dy0.floor().max(0.0) as usize..(dy1.ceil().min(dot_h)).max(0.0) as usize;
        let color = self.color;

        // Polygons smaller than a cell would vanish as a background tint.
        if polygon_area(points) < cell_area {
            for dy in ys {
                for dx in xs.clone() {
                    if contains(points, self.dot_center(dx, dy)) {
                        self.set_dot(dx as f32, dy as f32, color);
                    }
                }
            }
            return;
        }

        let cols = xs.start / 2..xs.end.div_ceil(2);
        let rows = ys.start / 4..ys.end.div_ceil(4);
        for row in rows {
            for col in cols.clone() {
                let center = self.dot_center(col * 2, row * 4).offset(
                    0.5 * self.width / dot_w,
                    -1.5 * self.height / dot_h,
                );
                if !contains(points, center) {
                    continue;
                }
                let idx = row * usize::from(self.cols) + col;
                if idx < self.bg.len() {
                    self.bg[idx] = color.over(self.bg[idx]);
                }
            }
        }
    }

    fn stroke(&mut self, kind: StrokeKind, points: &[Point], dash: DashPattern) {
        let bounds = Some((Point::new(0.0, 0.0), Point::new(self.width, self.height)));
        match kind {
            StrokeKind::Strip => {
                for (a, b) in dash_segments_in(points, dash, bounds) {
                    self.draw_line(a, b);
                }
            },
            StrokeKind::Loop | StrokeKind::Segments => {
                for (a, b) in kind.segments(points) {
                    for (a, b) in dash_segments_in(&[a, b], dash, bounds) {
                        self.draw_line(a, b);
                    }
                }
            },
        }
    }

    fn glyph(&mut self, ch: char, placement: &GlyphPlacement) {
        let (dx, dy) = self.to_dot(placement.center());
        if !(dx.is_finite() && dy.is_finite()) || dx < 0.0 || dy < 0.0 {
            return;
        }
        let (col, row) = ((dx / 2.0) as usize, (dy / 4.0) as usize);
        if col >= usize::from(self.cols) || row >= usize::from(self.rows) {
            return;
        }
        let idx = row * usize::from(self.cols) + col;
        self.text[idx] = Some((ch, self.color.over(self.bg[idx])));
    }
}

impl Widget for &BrailleSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows.min(area.height) {
            for col in 0..self.cols.min(area.width) {
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                let idx = usize::from(row) * usize::from(self.cols) + usize::from(col);
                let fg = match self.text[idx] {
                    Some((_, color)) => color,
                    None => self.fg[idx],
                };
                cell.set_char(self.symbol(col, row))
                    .set_fg(fg.to_color())
                    .set_bg(self.bg[idx].to_color());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> BrailleSurface {
        // One cell per 4x8 units.
        BrailleSurface::new(10, 5, 40.0, 40.0, Rgba::WHITE)
    }

    #[test]
    fn test_horizontal_line_sets_dots_in_one_row() {
        let mut s = surface();
        s.set_color(Rgba::BLACK);
        s.stroke(
            StrokeKind::Strip,
            &[Point::new(0.0, 39.0), Point::new(39.0, 39.0)],
            DashPattern::SOLID,
        );
        for col in 0..10 {
            assert_ne!(s.symbol(col, 0), ' ', "col {col}");
            assert_eq!(s.symbol(col, 1), ' ');
        }
        assert_eq!(s.foreground(3, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_top_left_dot_encoding() {
        let mut s = surface();
        s.stroke(
            StrokeKind::Segments,
            &[Point::new(0.5, 39.5), Point::new(0.5, 39.5)],
            DashPattern::SOLID,
        );
        // Zero-length segments are dropped by the dash splitter.
        assert_eq!(s.symbol(0, 0), ' ');

        s.draw_line(Point::new(0.5, 39.5), Point::new(0.5, 39.5));
        assert_eq!(s.symbol(0, 0), '\u{2801}');
    }

    #[test]
    fn test_large_fill_tints_background() {
        let mut s = surface();
        s.set_color(Rgba::rgb(0.0, 0.0, 1.0));
        s.fill_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 40.0),
            Point::new(0.0, 40.0),
        ]);
        assert_eq!(s.background(0, 0), Some(Rgba::rgb(0.0, 0.0, 1.0)));
        assert_eq!(s.background(4, 4), Some(Rgba::rgb(0.0, 0.0, 1.0)));
        assert_eq!(s.background(5, 0), Some(Rgba::WHITE));
        assert_eq!(s.symbol(0, 0), ' ');
    }

    #[test]
    fn test_small_fill_becomes_dots() {
        let mut s = surface();
        s.fill_polygon(&[
            Point::new(20.0, 20.0),
            Point::new(23.0, 20.0),
            Point::new(21.5, 23.0),
        ]);
        let any_dots = (0..10).any(|c| (0..5).any(|r| s.symbol(c, r) != ' '));
        assert!(any_dots);
        assert_eq!(s.background(5, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut s = surface();
        s.set_color(Rgba::rgba(0.0, 0.0, 0.0, 0.5));
        s.fill_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(40.0, 40.0),
            Point::new(0.0, 40.0),
        ]);
        let bg = s.background(2, 2).unwrap();
        assert!((bg.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_glyph_lands_in_cell_and_renders() {
        let mut s = surface();
        s.set_color(Rgba::rgb(1.0, 0.0, 0.0));
        let placement = GlyphPlacement {
            origin: Point::new(8.0, 16.0),
            angle: 0.0,
            scale_x: 0.0,
            scale_y: 0.0,
            stroke_width: 1.0,
        };
        s.glyph('x', &placement);
        // y = 16 is the boundary between rows 2 and 3 (rows are 8 units tall).
        assert_eq!(s.symbol(2, 3), 'x');

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        (&s).render(area, &mut buf);
        let cell = buf.cell((2u16, 3u16)).unwrap();
        assert_eq!(cell.symbol(), "x");
        assert_eq!(cell.fg, ratatui::style::Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_dotted_strip_with_huge_excursion() {
        let mut s = BrailleSurface::new(80, 24, 640.0, 480.0, Rgba::WHITE);
        s.set_color(Rgba::BLACK);
        for depth in [-1e9_f32, -1e30] {
            s.stroke(
                StrokeKind::Strip,
                &[Point::new(40.0, 240.0), Point::new(600.0, 240.0), Point::new(610.0, depth)],
                DashPattern::DOTTED,
            );
        }
        // The horizontal run is dotted: some cells on row 12 are blank, some not.
        let row: Vec<char> = (0..80).map(|c| s.symbol(c, 12)).collect();
        assert!(row.iter().any(|&c| c != ' '));
        // The drop is drawn down to the bottom edge.
        assert!((0..80).any(|c| s.symbol(c, 23) != ' '));
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut s = surface();
        s.stroke(
            StrokeKind::Strip,
            &[Point::new(f32::NAN, 0.0), Point::new(1.0, f32::INFINITY)],
            DashPattern::SOLID,
        );
        s.fill_polygon(&[
            Point::new(f32::NAN, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        ]);
        assert!((0..10).all(|c| (0..5).all(|r| s.symbol(c, r) == ' ')));
    }
}

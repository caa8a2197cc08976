//! Immediate-mode 2D drawing.
//!
//! Everything the plot renderer draws goes through the [`Surface`] trait: filled
//! polygons, stroked polylines with a stipple mask, and single stroke-font glyphs.
//! A surface also carries ambient state (current color and line width) that
//! drawing routines read and must hand back unchanged, see [`AmbientGuard`].

pub mod braille;
pub mod dash;
pub mod recording;
pub mod text;

use std::ops::{Deref, DerefMut};

use ratatui::style::Color;

pub use braille::BrailleSurface;
pub use dash::{dash_segments, dash_segments_in, Bounds};
pub use recording::{Command, RecordingSurface};
pub use text::{render_text, Align, TextLayout};

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey of the given intensity.
    pub const fn grey(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Composite this color over an opaque background.
    pub fn over(self, background: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: f32, bg: f32| fg * a + bg * (1.0 - a);
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// Convert to a terminal color, dropping alpha.
    pub fn to_color(self) -> Color {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::Rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// A point on the drawing surface. The y axis points up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Rotate by `degrees` counter-clockwise around the origin.
    pub fn rotated(self, degrees: f32) -> Point {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Translate by `dx`, `dy`.
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// 16-bit line stipple mask. Bit `i` (LSB first) controls pixel `i mod 16`
/// along the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashPattern(pub u16);

impl DashPattern {
    /// Continuous line.
    pub const SOLID: DashPattern = DashPattern(0xFFFF);
    /// Four on, four off.
    pub const DASHED: DashPattern = DashPattern(0xF0F0);
    /// Two on, two off.
    pub const DOTTED: DashPattern = DashPattern(0x3333);

    /// Whether the pixel at `index` along the stroke is drawn.
    pub fn is_on(self, index: u32) -> bool {
        (self.0 >> (index % 16)) & 1 == 1
    }

    /// Whether every pixel is drawn.
    pub fn is_solid(self) -> bool {
        self.0 == u16::MAX
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self::SOLID
    }
}

/// How the vertices of a stroke are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    /// Consecutive vertices joined into an open polyline.
    Strip,
    /// Like `Strip`, with the last vertex joined back to the first.
    Loop,
    /// Vertices taken pairwise as independent segments.
    Segments,
}

impl StrokeKind {
    /// Split `points` into the line segments this kind describes.
    pub fn segments(self, points: &[Point]) -> Vec<(Point, Point)> {
        match self {
            StrokeKind::Strip => points.windows(2).map(|w| (w[0], w[1])).collect(),
            StrokeKind::Loop => {
                let mut segments: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
                if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                    if points.len() > 2 {
                        segments.push((last, first));
                    }
                }
                segments
            },
            StrokeKind::Segments => points.chunks_exact(2).map(|c| (c[0], c[1])).collect(),
        }
    }
}

/// Where and how a single glyph is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    /// Glyph origin (left end of the baseline) in surface coordinates.
    pub origin: Point,
    /// Rotation in degrees, counter-clockwise.
    pub angle: f32,
    /// Horizontal scale applied to the stroke font outline.
    pub scale_x: f32,
    /// Vertical scale applied to the stroke font outline.
    pub scale_y: f32,
    /// Stroke width of the outline.
    pub stroke_width: f32,
}

impl GlyphPlacement {
    /// Middle of the glyph cell in surface coordinates.
    pub fn center(&self) -> Point {
        let half = Point::new(
            0.5 * text::GLYPH_ADVANCE * self.scale_x / text::GLYPH_SCALE_X,
            0.5 * text::GLYPH_HEIGHT * self.scale_y / text::GLYPH_SCALE_Y,
        )
        .rotated(self.angle);
        self.origin.offset(half.x, half.y)
    }
}

/// Immediate-mode drawing capability.
///
/// Strokes and fills use the ambient color; strokes also use the ambient line
/// width.
pub trait Surface {
    /// Current ambient color.
    fn color(&self) -> Rgba;
    /// Replace the ambient color.
    fn set_color(&mut self, color: Rgba);
    /// Current ambient line width.
    fn line_width(&self) -> f32;
    /// Replace the ambient line width.
    fn set_line_width(&mut self, width: f32);
    /// Fill a convex polygon.
    fn fill_polygon(&mut self, points: &[Point]);
    /// Stroke vertices as described by `kind`, masked by `dash`.
    fn stroke(&mut self, kind: StrokeKind, points: &[Point], dash: DashPattern);
    /// Draw one stroke-font character.
    fn glyph(&mut self, ch: char, placement: &GlyphPlacement);
}

/// Restores a surface's ambient color and line width when dropped.
#[derive(Debug)]
pub struct AmbientGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    color: Rgba,
    line_width: f32,
}

impl<'a, S: Surface + ?Sized> AmbientGuard<'a, S> {
    /// Capture the current ambient state of `surface`.
    pub fn new(surface: &'a mut S) -> Self {
        let color = surface.color();
        let line_width = surface.line_width();
        Self {
            surface,
            color,
            line_width,
        }
    }

    /// The color that will be restored.
    pub fn saved_color(&self) -> Rgba {
        self.color
    }
}

impl<S: Surface + ?Sized> Deref for AmbientGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for AmbientGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for AmbientGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_color(self.color);
        self.surface.set_line_width(self.line_width);
    }
}

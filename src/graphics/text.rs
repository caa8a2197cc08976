//! Stroke-font labels with alignment and an optional legibility halo.

use std::ops::BitOr;

use super::{AmbientGuard, GlyphPlacement, Point, Rgba, Surface};

/// Horizontal advance of one glyph at size 1.
pub const GLYPH_ADVANCE: f32 = 9.4;
/// Cap height of one glyph at size 1.
pub const GLYPH_HEIGHT: f32 = 8.0;
/// Horizontal scale from stroke-font units to surface units at size 1.
pub const GLYPH_SCALE_X: f32 = 0.09;
/// Vertical scale from stroke-font units to surface units at size 1.
pub const GLYPH_SCALE_Y: f32 = 0.08;

const HALO_LAYERS: u8 = 5;
const HALO_GROWTH: f32 = 0.7;
const HALO_TINT: Rgba = Rgba::WHITE;

/// Text alignment bit-set: one horizontal option, one vertical option, and
/// optionally [`Align::HIGHLIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Align(pub u8);

impl Align {
    /// Anchor at the horizontal middle of the text.
    pub const H_CENTER: Align = Align(0x01);
    /// Anchor at the right edge.
    pub const H_RIGHT: Align = Align(0x02);
    /// Anchor at the left edge.
    pub const H_LEFT: Align = Align(0x04);
    /// Draw a white halo behind the text.
    pub const HIGHLIGHT: Align = Align(0x08);
    /// Anchor at the vertical middle.
    pub const V_CENTER: Align = Align(0x10);
    /// Anchor at the top edge.
    pub const V_UP: Align = Align(0x20);
    /// Anchor at the baseline.
    pub const V_DOWN: Align = Align(0x40);

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: Align) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Align {
    type Output = Align;

    fn bitor(self, rhs: Align) -> Align {
        Align(self.0 | rhs.0)
    }
}

/// Geometry of a label relative to its anchor, before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    /// Distance the text is shifted left of the anchor.
    pub offset_x: f32,
    /// Distance the text is shifted below the anchor.
    pub offset_y: f32,
    /// Rendered width.
    pub width: f32,
    /// Rendered height.
    pub height: f32,
}

impl TextLayout {
    /// Compute the layout of `text` at `size` with `align`.
    ///
    /// When several options of one axis are set, center wins over right and
    /// right over left; up wins over down the same way.
    pub fn new(text: &str, size: f32, align: Align) -> Self {
        let width = text.chars().count() as f32 * GLYPH_ADVANCE * size;
        let height = GLYPH_HEIGHT * size;

        let offset_x = if align.contains(Align::H_CENTER) {
            width / 2.0
        } else if align.contains(Align::H_RIGHT) {
            width
        } else {
            0.0
        };
        let offset_y = if align.contains(Align::V_CENTER) {
            height / 2.0
        } else if align.contains(Align::V_UP) {
            height
        } else {
            0.0
        };

        Self {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Bottom-left corner of the text box, relative to the anchor.
    pub fn bottom_left(&self) -> Point {
        Point::new(-self.offset_x, -self.offset_y)
    }

    /// Top-right corner of the text box, relative to the anchor.
    pub fn top_right(&self) -> Point {
        Point::new(self.width - self.offset_x, self.height - self.offset_y)
    }
}

/// Draw `text` anchored at (`x`, `y`), rotated by `angle` degrees about the
/// anchor.
///
/// Glyphs use the ambient color. With [`Align::HIGHLIGHT`] five fading white
/// rectangles are painted behind the text first; the ambient color and width
/// are unchanged when this returns.
#[allow(clippy::too_many_arguments)]
pub fn render_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: f32,
    y: f32,
    angle: f32,
    stroke_width: f32,
    size: f32,
    align: Align,
) {
    if text.is_empty() {
        return;
    }

    let layout = TextLayout::new(text, size, align);
    let anchor = Point::new(x, y);
    let to_surface = |local: Point| {
        let p = local.rotated(angle);
        Point::new(anchor.x + p.x, anchor.y + p.y)
    };

    let mut surface = AmbientGuard::new(surface);

    if align.contains(Align::HIGHLIGHT) {
        let bottom_left = layout.bottom_left();
        let top_right = layout.top_right();
        for layer in 0..HALO_LAYERS {
            let grow = f32::from(layer) * HALO_GROWTH;
            let alpha = 0.6 - f32::from(layer) * 0.1;
            surface.set_color(Rgba { a: alpha, ..HALO_TINT });
            let corners = [
                Point::new(bottom_left.x - grow, bottom_left.y - grow),
                Point::new(top_right.x + grow, bottom_left.y - grow),
                Point::new(top_right.x + grow, top_right.y + grow),
                Point::new(bottom_left.x - grow, top_right.y + grow),
            ]
            .map(to_surface);
            surface.fill_polygon(&corners);
        }
        let text_color = surface.saved_color();
        surface.set_color(text_color);
    }

    surface.set_line_width(stroke_width);
    let advance = GLYPH_ADVANCE * size;
    for (i, ch) in text.chars().enumerate() {
        let local = Point::new(-layout.offset_x + advance * i as f32, -layout.offset_y);
        let placement = GlyphPlacement {
            origin: to_surface(local),
            angle,
            scale_x: GLYPH_SCALE_X * size,
            scale_y: GLYPH_SCALE_Y * size,
            stroke_width,
        };
        surface.glyph(ch, &placement);
    }
}

//! In-memory surface that records every drawing command.

use super::{DashPattern, GlyphPlacement, Point, Rgba, StrokeKind, Surface};

/// One recorded drawing command, with the ambient state it was drawn in.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Filled polygon.
    Fill {
        /// Polygon vertices.
        points: Vec<Point>,
        /// Ambient color at the time of the call.
        color: Rgba,
    },
    /// Stroked vertices.
    Stroke {
        /// How the vertices are connected.
        kind: StrokeKind,
        /// Stroke vertices.
        points: Vec<Point>,
        /// Stipple mask.
        dash: DashPattern,
        /// Ambient color at the time of the call.
        color: Rgba,
        /// Ambient line width at the time of the call.
        width: f32,
    },
    /// Single glyph.
    Glyph {
        /// Character drawn.
        ch: char,
        /// Placement of the glyph.
        placement: GlyphPlacement,
        /// Ambient color at the time of the call.
        color: Rgba,
    },
}

/// Surface that draws nothing and remembers everything.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    color: Rgba,
    line_width: f32,
    commands: Vec<Command>,
}

impl RecordingSurface {
    /// Create an empty recording with opaque white color and unit width.
    pub fn new() -> Self {
        Self {
            color: Rgba::WHITE,
            line_width: 1.0,
            commands: Vec::new(),
        }
    }

    /// All recorded commands, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Forget recorded commands, keeping the ambient state.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded strokes of the given kind.
    pub fn strokes(&self, kind: StrokeKind) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Stroke { kind: k, .. } if *k == kind))
            .collect()
    }

    /// Recorded glyphs with their placement.
    pub fn glyphs(&self) -> Vec<(char, GlyphPlacement)> {
        self.glyph_commands()
            .into_iter()
            .map(|(ch, placement, _)| (ch, placement))
            .collect()
    }

    /// Recorded glyphs with their placement and color.
    pub fn glyph_commands(&self) -> Vec<(char, GlyphPlacement, Rgba)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Glyph {
                    ch,
                    placement,
                    color,
                } => Some((*ch, *placement, *color)),
                _ => None,
            })
            .collect()
    }

    /// All glyph characters concatenated in drawing order.
    pub fn text(&self) -> String {
        self.glyphs().into_iter().map(|(ch, _)| ch).collect()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn color(&self) -> Rgba {
        self.color
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.commands.push(Command::Fill {
            points: points.to_vec(),
            color: self.color,
        });
    }

    fn stroke(&mut self, kind: StrokeKind, points: &[Point], dash: DashPattern) {
        self.commands.push(Command::Stroke {
            kind,
            points: points.to_vec(),
            dash,
            color: self.color,
            width: self.line_width,
        });
    }

    fn glyph(&mut self, ch: char, placement: &GlyphPlacement) {
        self.commands.push(Command::Glyph {
            ch,
            placement: *placement,
            color: self.color,
        });
    }
}

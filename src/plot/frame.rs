//! Screen rectangle a plot is drawn within.

/// Immutable rectangle anchoring a plot on the drawing surface.
///
/// `x`, `y` is the bottom-left corner; the y axis points up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Frame {
    /// Create a frame.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Bottom edge.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The drawing rectangle left after reserving `left` and `bottom` margins.
    pub fn inner(&self, left: f32, bottom: f32) -> InnerRect {
        InnerRect {
            x: self.x as f32 + left,
            y: self.y as f32 + bottom,
            width: (self.width as f32 - left).max(0.0),
            height: (self.height as f32 - bottom).max(0.0),
        }
    }
}

/// Rectangle curves are mapped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerRect {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl InnerRect {
    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_subtracts_margins() {
        let inner = Frame::new(10, 20, 620, 200).inner(10.0, 15.0);
        assert_eq!(inner.x, 20.0);
        assert_eq!(inner.y, 35.0);
        assert_eq!(inner.width, 610.0);
        assert_eq!(inner.height, 185.0);
        assert_eq!(inner.right(), 630.0);
        assert_eq!(inner.top(), 220.0);
    }

    #[test]
    fn test_inner_never_negative() {
        let inner = Frame::new(0, 0, 5, 5).inner(10.0, 15.0);
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }
}

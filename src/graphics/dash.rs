//! Stipple masking of polylines.

use super::{DashPattern, Point};

/// Length of one stipple period.
const PERIOD: f64 = 16.0;
/// Longest visible span walked per segment; the rest of the segment is dropped.
const MAX_WALK: f64 = 65_536.0;

/// Axis-aligned clip rectangle as (bottom-left, top-right).
pub type Bounds = (Point, Point);

/// Split a polyline into the sub-segments left visible by `pattern`.
///
/// The pattern advances one bit per unit of length and keeps its phase across
/// vertices, so a dashed curve sampled densely still shows regular dashes.
/// Zero-length and non-finite segments are skipped.
pub fn dash_segments(points: &[Point], pattern: DashPattern) -> Vec<(Point, Point)> {
    dash_segments_in(points, pattern, None)
}

/// Like [`dash_segments`], keeping only the parts inside `bounds`.
///
/// Clipping does not shift the pattern: the phase still counts the length
/// outside the rectangle.
pub fn dash_segments_in(
    points: &[Point],
    pattern: DashPattern,
    bounds: Option<Bounds>,
) -> Vec<(Point, Point)> {
    let mut out = Vec::new();
    if pattern.0 == 0 {
        return out;
    }

    let mut travelled = 0.0_f64;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let len = length(a, b);
        if !len.is_finite() || len <= f64::from(f32::EPSILON) {
            continue;
        }
        let Some((t0, t1)) = clip(a, b, bounds) else {
            travelled = (travelled + len) % PERIOD;
            continue;
        };

        if pattern.is_solid() {
            out.push((lerp(a, b, t0), lerp(a, b, t1)));
            travelled = (travelled + len) % PERIOD;
            continue;
        }

        let start = t0 * len;
        let span = ((t1 - t0) * len).min(MAX_WALK);
        let phase = (travelled + start) % PERIOD;

        // Visible run, as distances from `start`.
        let mut run: Option<(f64, f64)> = None;
        let mut s = 0.0_f64;
        while s < span {
            let pixel = (phase + s).floor();
            let end = (pixel + 1.0 - phase).max(s + 1e-9).min(span);
            if pattern.is_on((pixel as u64 % 16) as u32) {
                run = Some(run.map_or((s, end), |(from, _)| (from, end)));
            } else if let Some((from, to)) = run.take() {
                out.push(sub_segment(a, b, len, start + from, start + to));
            }
            s = end;
        }
        if let Some((from, to)) = run {
            out.push(sub_segment(a, b, len, start + from, start + to));
        }
        travelled = (travelled + len) % PERIOD;
    }
    out
}

fn length(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    dx.hypot(dy)
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    Point::new(
        (ax + (f64::from(b.x) - ax) * t) as f32,
        (ay + (f64::from(b.y) - ay) * t) as f32,
    )
}

fn sub_segment(a: Point, b: Point, len: f64, from: f64, to: f64) -> (Point, Point) {
    (lerp(a, b, from / len), lerp(a, b, to / len))
}

/// Parameter range of `a`..`b` inside `bounds` (Liang-Barsky).
fn clip(a: Point, b: Point, bounds: Option<Bounds>) -> Option<(f64, f64)> {
    let Some((lo, hi)) = bounds else {
        return Some((0.0, 1.0));
    };
    let (x0, y0) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - x0, f64::from(b.y) - y0);
    let edges = [
        (-dx, x0 - f64::from(lo.x)),
        (dx, f64::from(hi.x) - x0),
        (-dy, y0 - f64::from(lo.y)),
        (dy, f64::from(hi.y) - y0),
    ];

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
    }
    (t0 < t1).then_some((t0, t1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(len: f32) -> [Point; 2] {
        [Point::new(0.0, 0.0), Point::new(len, 0.0)]
    }

    fn window() -> Option<Bounds> {
        Some((Point::new(0.0, 0.0), Point::new(640.0, 480.0)))
    }

    #[test]
    fn test_solid_keeps_every_segment() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 5.0),
        ];
        assert_eq!(dash_segments(&pts, DashPattern::SOLID).len(), 2);
    }

    #[test]
    fn test_dashed_runs() {
        // 0xF0F0: pixels 4..8 and 12..16 are on.
        let segs = dash_segments(&horizontal(16.0), DashPattern::DASHED);
        assert_eq!(segs.len(), 2);
        assert!((segs[0].0.x - 4.0).abs() < 1e-4);
        assert!((segs[0].1.x - 8.0).abs() < 1e-4);
        assert!((segs[1].0.x - 12.0).abs() < 1e-4);
        assert!((segs[1].1.x - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_phase_carries_across_vertices() {
        // Two 2-unit segments: the second starts at pixel 2 of the pattern.
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(4.0, 0.0),
        ];
        // 0x000C: only pixels 2 and 3 are on.
        let segs = dash_segments(&pts, DashPattern(0x000C));
        assert_eq!(segs.len(), 1);
        assert!((segs[0].0.x - 2.0).abs() < 1e-4);
        assert!((segs[0].1.x - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_pattern_draws_nothing() {
        assert!(dash_segments(&horizontal(32.0), DashPattern(0)).is_empty());
    }

    #[test]
    fn test_degenerate_segments_skipped() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(f32::NAN, 1.0),
            Point::new(f32::INFINITY, 1.0),
        ];
        assert!(dash_segments(&pts, DashPattern::DOTTED).is_empty());
        assert!(dash_segments(&pts, DashPattern::SOLID).is_empty());
    }

    #[test]
    fn test_clipping_keeps_phase() {
        // The first 4 units lie left of the window, so the visible part starts
        // at pixel 4 of the pattern, which is on for 0xF0F0.
        let pts = [Point::new(-4.0, 10.0), Point::new(12.0, 10.0)];
        let segs = dash_segments_in(&pts, DashPattern::DASHED, window());
        assert_eq!(segs.len(), 2);
        assert!((segs[0].0.x - 0.0).abs() < 1e-4);
        assert!((segs[0].1.x - 4.0).abs() < 1e-4);
        assert!((segs[1].0.x - 8.0).abs() < 1e-4);
        assert!((segs[1].1.x - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_segment_outside_bounds_dropped() {
        let pts = [Point::new(-50.0, -50.0), Point::new(-10.0, -1.0)];
        assert!(dash_segments_in(&pts, DashPattern::DOTTED, window()).is_empty());
        assert!(dash_segments_in(&pts, DashPattern::SOLID, window()).is_empty());
    }

    #[test]
    fn test_huge_excursions_stay_bounded() {
        for depth in [-1e9_f32, -1e30] {
            let pts = [Point::new(320.0, 200.0), Point::new(330.0, depth)];
            let clipped = dash_segments_in(&pts, DashPattern::DOTTED, window());
            assert!(!clipped.is_empty());
            for (a, b) in &clipped {
                assert!(a.y >= -1e-3 && b.y >= -1e-3, "{:?} {:?}", a, b);
            }

            // Unclipped, the walk stops after a bounded number of pixels.
            let unclipped = dash_segments(&pts, DashPattern::DOTTED);
            assert!(unclipped.len() <= MAX_WALK as usize / 2);
        }
    }

    #[test]
    fn test_solid_segment_clipped_to_bounds() {
        let pts = [Point::new(100.0, 100.0), Point::new(100.0, -1e12)];
        let segs = dash_segments_in(&pts, DashPattern::SOLID, window());
        assert_eq!(segs.len(), 1);
        assert!((segs[0].1.y - 0.0).abs() < 1e-3);
    }
}

//! SVG Chart Geometry
//!
//! Pure path and shape builders for the dashboard charts. Coordinates are in a
//! `width` x `height` viewBox with the origin at the top left.

use std::f64::consts::PI;
use std::fmt::Write;

/// Drawing area of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Inset on every side
    pub padding: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// x of point `index` out of `count` evenly spaced points
    fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.inner_width() / 2.0;
        }
        self.padding + self.inner_width() * index as f64 / (count - 1) as f64
    }

    /// y of `value` on a `min..max` scale; a flat scale sits mid-height
    fn y_at(&self, value: f64, min: f64, max: f64) -> f64 {
        if (max - min).abs() < f64::EPSILON {
            return self.padding + self.inner_height() / 2.0;
        }
        self.padding + self.inner_height() * (1.0 - (value - min) / (max - min))
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn fmt(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

// ========================
// Line charts
// ========================

/// Polyline through `values`, scaled to their own range
pub fn line_path(values: &[f64], frame: Frame) -> String {
    let Some((min, max)) = bounds(values.iter().copied()) else {
        return String::new();
    };
    gapped_line_path(&values.iter().map(|v| Some(*v)).collect::<Vec<_>>(), frame, min, max)
}

/// Closed area under [`line_path`], down to the baseline
pub fn area_path(values: &[f64], frame: Frame) -> String {
    let line = line_path(values, frame);
    if line.is_empty() {
        return line;
    }
    let first = frame.x_at(0, values.len());
    let last = frame.x_at(values.len() - 1, values.len());
    let base = frame.baseline();
    format!("{} L{},{} L{},{} Z", line, fmt(last), fmt(base), fmt(first), fmt(base))
}

/// Line through `values` on an explicit `min..max` scale. `None` breaks the
/// line, so the next present value starts a new subpath.
pub fn gapped_line_path(values: &[Option<f64>], frame: Frame, min: f64, max: f64) -> String {
    let mut path = String::new();
    let mut pen_down = false;
    for (i, value) in values.iter().enumerate() {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                let cmd = if pen_down { 'L' } else { 'M' };
                if !path.is_empty() {
                    path.push(' ');
                }
                let _ = write!(path, "{}{},{}", cmd, fmt(frame.x_at(i, values.len())), fmt(frame.y_at(v, min, max)));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

/// Shared scale for several series, padded so lines never touch the edges
pub fn shared_range(series: &[&[Option<f64>]]) -> (f64, f64) {
    let Some((min, max)) = bounds(series.iter().flat_map(|s| s.iter().flatten().copied())) else {
        return (0.0, 1.0);
    };
    let margin = ((max - min) * 0.1).max(1.0);
    (min - margin, max + margin)
}

// ========================
// Bar charts
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars scaled from zero to the largest value. Negative values draw as empty.
pub fn bars(values: &[f64], frame: Frame, gap: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    let slot = frame.inner_width() / values.len() as f64;
    let width = (slot - gap).max(1.0);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = if max > 0.0 { (v.max(0.0) / max).min(1.0) } else { 0.0 };
            let height = frame.inner_height() * ratio;
            Bar {
                x: frame.padding + slot * i as f64 + (slot - width) / 2.0,
                y: frame.baseline() - height,
                width,
                height,
            }
        })
        .collect()
}

// ========================
// Donut
// ========================

/// One ring segment of a donut chart
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub path: String,
    /// Share of the total, 0.0 - 1.0
    pub fraction: f64,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Ring segments for `values`, clockwise from twelve o'clock
pub fn donut_segments(values: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<Segment> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|v| {
            let fraction = if v.is_finite() && *v > 0.0 { v / total } else { 0.0 };
            // A full ring cannot be drawn as a single arc
            let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
            let end = start + sweep;
            let large = if sweep > PI { 1 } else { 0 };

            let (ox1, oy1) = polar(cx, cy, outer, start);
            let (ox2, oy2) = polar(cx, cy, outer, end);
            let (ix2, iy2) = polar(cx, cy, inner, end);
            let (ix1, iy1) = polar(cx, cy, inner, start);

            let path = format!(
                "M{},{} A{},{} 0 {} 1 {},{} L{},{} A{},{} 0 {} 0 {},{} Z",
                fmt(ox1), fmt(oy1),
                fmt(outer), fmt(outer), large, fmt(ox2), fmt(oy2),
                fmt(ix2), fmt(iy2),
                fmt(inner), fmt(inner), large, fmt(ix1), fmt(iy1),
            );
            start = end;
            Segment { path, fraction }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Frame = Frame::new(100.0, 50.0, 0.0);

    #[test]
    fn test_line_path_spans_frame() {
        let path = line_path(&[1.0, 2.0, 3.0], FRAME);
        assert_eq!(path, "M0,50 L50,25 L100,0");
    }

    #[test]
    fn test_line_path_empty_and_single() {
        assert_eq!(line_path(&[], FRAME), "");
        assert_eq!(line_path(&[7.0], FRAME), "M50,25");
    }

    #[test]
    fn test_area_path_closes_to_baseline() {
        let path = area_path(&[0.0, 10.0], FRAME);
        assert_eq!(path, "M0,50 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn test_gap_starts_new_subpath() {
        let values = [Some(0.0), Some(10.0), None, Some(10.0)];
        let frame = Frame::new(30.0, 10.0, 0.0);
        let path = gapped_line_path(&values, frame, 0.0, 10.0);
        assert_eq!(path, "M0,10 L10,0 M30,0");
    }

    #[test]
    fn test_forecast_actual_series_ends() {
        let actual = [Some(400.0), Some(520.0), None, None];
        let predicted = [Some(400.0), Some(510.0), Some(540.0), Some(580.0)];
        let (min, max) = shared_range(&[actual.as_slice(), predicted.as_slice()]);
        assert!(min < 400.0 && max > 580.0);

        let frame = Frame::new(300.0, 100.0, 10.0);
        let actual_path = gapped_line_path(&actual, frame, min, max);
        let predicted_path = gapped_line_path(&predicted, frame, min, max);
        assert_eq!(actual_path.matches('L').count(), 1);
        assert_eq!(predicted_path.matches('L').count(), 3);
    }

    #[test]
    fn test_bars_scale_to_max() {
        let frame = Frame::new(40.0, 100.0, 0.0);
        let bars = bars(&[50.0, 100.0], frame, 0.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[0].y, 50.0);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].x, 20.0);
        assert_eq!(bars[1].width, 20.0);
    }

    #[test]
    fn test_bars_all_zero() {
        let bars = bars(&[0.0, 0.0], FRAME, 2.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn test_donut_fractions() {
        let segments = donut_segments(&[400.0, 300.0, 300.0, 200.0], 50.0, 50.0, 40.0, 25.0);
        assert_eq!(segments.len(), 4);
        let total: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((segments[0].fraction - 1.0 / 3.0).abs() < 1e-9);
        // First segment starts at twelve o'clock
        assert!(segments[0].path.starts_with("M50,10 "));
    }

    #[test]
    fn test_donut_single_value_is_large_arc() {
        let segments = donut_segments(&[5.0], 0.0, 0.0, 10.0, 5.0);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].path.contains(" 0 1 1 "));
    }

    #[test]
    fn test_donut_empty_total() {
        assert!(donut_segments(&[0.0, -1.0], 0.0, 0.0, 10.0, 5.0).is_empty());
    }
}

//! SVG path data for the series line and its filled area, using monotone
//! cubic interpolation along x so the curve never overshoots a data point.

use std::fmt::Write;

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Tangent at `b` given its neighbours.
fn interior_slope(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let h0 = b.0 - a.0;
    let h1 = c.0 - b.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (b.1 - a.1) / h0;
    let s1 = (c.1 - b.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// Tangent at an end point from the segment slope and the inner tangent.
fn end_slope(a: (f64, f64), b: (f64, f64), inner: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        inner
    } else {
        (3.0 * (b.1 - a.1) / h - inner) / 2.0
    }
}

fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = end_slope(points[0], points[1], t[1]);
    t[n - 1] = end_slope(points[n - 2], points[n - 1], t[n - 2]);
    t
}

/// Path data for a monotone curve through `points`, which must be sorted by x.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    let Some(&(x0, y0)) = points.first() else {
        return d;
    };
    let _ = write!(d, "M{x0:.2},{y0:.2}");
    match points.len() {
        1 => {}
        2 => {
            let (x1, y1) = points[1];
            let _ = write!(d, "L{x1:.2},{y1:.2}");
        }
        _ => {
            let t = tangents(points);
            for i in 0..points.len() - 1 {
                let (xa, ya) = points[i];
                let (xb, yb) = points[i + 1];
                let dx = (xb - xa) / 3.0;
                let _ = write!(
                    d,
                    "C{:.2},{:.2},{:.2},{:.2},{xb:.2},{yb:.2}",
                    xa + dx,
                    ya + dx * t[i],
                    xb - dx,
                    yb - dx * t[i + 1],
                );
            }
        }
    }
    d
}

/// The line closed down to `baseline` (the bottom of the inner area).
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = line_path(points);
    let _ = write!(
        d,
        "L{:.2},{baseline:.2}L{:.2},{baseline:.2}Z",
        last.0, first.0
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_series_degrade_to_moves_and_lines() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(line_path(&[(1.0, 2.0)]), "M1.00,2.00");
        assert_eq!(line_path(&[(0.0, 0.0), (10.0, 5.0)]), "M0.00,0.00L10.00,5.00");
    }

    #[test]
    fn straight_line_keeps_straight_controls() {
        let d = line_path(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]);
        assert_eq!(d, "M0.00,0.00C1.00,1.00,2.00,2.00,3.00,3.00C4.00,4.00,5.00,5.00,6.00,6.00");
    }

    #[test]
    fn local_extremum_gets_flat_tangent() {
        let pts = [(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)];
        let t = tangents(&pts);
        assert_eq!(t[1], 0.0);
    }

    #[test]
    fn area_closes_on_the_baseline() {
        let d = area_path(&[(0.0, 10.0), (50.0, 20.0)], 100.0);
        assert_eq!(d, "M0.00,10.00L50.00,20.00L50.00,100.00L0.00,100.00Z");
        assert_eq!(area_path(&[], 100.0), "");
    }
}

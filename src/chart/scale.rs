//! Pixel mapping for the month-series chart: a point scale for the month
//! labels and a niced linear scale for the values.

use crate::config::ChartConfig;
use crate::shared::types::SeriesPoint;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Half-up rounding, as browsers round tick indices.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Returns `(i1, i2, inc)`: tick indices and increment. A negative `inc`
/// encodes a fractional step of `1 / -inc`.
fn tick_params(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !(step.is_finite() && step > 0.0) {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (i1, i2, inc) = if power < 0.0 {
        let f = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * f);
        let mut i2 = round_half_up(stop * f);
        if i1 / f < start {
            i1 += 1.0;
        }
        if i2 / f > stop {
            i2 -= 1.0;
        }
        (i1, i2, -f)
    } else {
        let f = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / f);
        let mut i2 = round_half_up(stop / f);
        if i1 * f < start {
            i1 += 1.0;
        }
        if i2 * f > stop {
            i2 -= 1.0;
        }
        (i1, i2, f)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_params(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_params(start, stop, count as f64).map_or(0.0, |(_, _, inc)| inc)
}

/// Evenly spaces distinct labels across `[0, width]` in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    labels: Vec<String>,
    width: f64,
}

impl PointScale {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>, width: f64) -> Self {
        let mut distinct: Vec<String> = Vec::new();
        for label in labels {
            if !distinct.iter().any(|l| l == label) {
                distinct.push(label.to_string());
            }
        }
        Self {
            labels: distinct,
            width: width.max(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Distance between neighbouring labels; 0 with fewer than two labels.
    pub fn step(&self) -> f64 {
        if self.labels.len() < 2 {
            0.0
        } else {
            self.width / (self.labels.len() - 1) as f64
        }
    }

    pub fn position(&self, index: usize) -> f64 {
        index as f64 * self.step()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|i| self.position(i))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Continuous linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Expands the domain outward to round tick boundaries. Leaves the domain
    /// untouched when it does not settle within ten passes.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                self.domain = if reversed { (stop, start) } else { (start, stop) };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    /// Round values inside the domain, about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }
        let (lo, hi) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        let Some((i1, i2, inc)) = tick_params(lo, hi, count as f64) else {
            return Vec::new();
        };
        if i2 < i1 {
            return Vec::new();
        }
        let n = (i2 - i1) as usize + 1;
        let mut out: Vec<f64> = (0..n)
            .map(|i| {
                let k = i1 + i as f64;
                if inc < 0.0 {
                    k / -inc
                } else {
                    k * inc
                }
            })
            .collect();
        if d1 < d0 {
            out.reverse();
        }
        out
    }
}

/// Both scales of one chart render, plus the inner drawing box.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesScales {
    pub x: PointScale,
    pub y: LinearScale,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Every value is zero: the y-domain is the configured fallback and the
    /// line, area and markers are not drawn.
    pub all_zero: bool,
    grid_ticks: usize,
}

impl SeriesScales {
    pub fn new(points: &[SeriesPoint], width: f64, height: f64, config: &ChartConfig) -> Self {
        let m = config.margins;
        let inner_width = (width - m.left - m.right).max(0.0);
        let inner_height = (height - m.top - m.bottom).max(0.0);

        let x = PointScale::new(points.iter().map(|p| p.month.as_str()), inner_width);

        let all_zero = points.iter().all(|p| p.value == 0.0);
        let domain = if all_zero {
            config.zero_domain
        } else {
            let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
            let max = points
                .iter()
                .map(|p| p.value)
                .fold(f64::NEG_INFINITY, f64::max);
            (min * config.low_factor, max * config.high_factor)
        };
        let y = LinearScale::new(domain, (inner_height, 0.0)).nice(config.nice_ticks);

        Self {
            x,
            y,
            inner_width,
            inner_height,
            all_zero,
            grid_ticks: config.grid_ticks,
        }
    }

    /// X pixel of a label; unknown labels sit at the left edge.
    pub fn x(&self, label: &str) -> f64 {
        self.x.get(label).unwrap_or(0.0)
    }

    pub fn y(&self, value: f64) -> f64 {
        self.y.apply(value)
    }

    pub fn plot(&self, point: &SeriesPoint) -> (f64, f64) {
        (self.x(&point.month), self.y(point.value))
    }

    pub fn plot_all(&self, points: &[SeriesPoint]) -> Vec<(f64, f64)> {
        points.iter().map(|p| self.plot(p)).collect()
    }

    pub fn draws_series(&self) -> bool {
        !self.all_zero
    }

    /// `(value, y pixel)` of each horizontal grid row.
    pub fn grid_rows(&self) -> Vec<(f64, f64)> {
        self.y
            .ticks(self.grid_ticks)
            .into_iter()
            .map(|v| (v, self.y.apply(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::Fixtures;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pts(values: &[f64]) -> Vec<SeriesPoint> {
        const M: [&str; 7] = ["Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb"];
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesPoint::new(M[i % 7], *v))
            .collect()
    }

    #[test]
    fn point_scale_spans_the_inner_width() {
        let s = PointScale::new(["a", "b", "c", "d", "e"], 400.0);
        assert_eq!(s.get("a"), Some(0.0));
        assert_eq!(s.get("c"), Some(200.0));
        assert_eq!(s.get("e"), Some(400.0));
        assert_eq!(s.get("z"), None);
    }

    #[test]
    fn single_label_maps_to_zero() {
        let s = PointScale::new(["only"], 300.0);
        assert_eq!(s.get("only"), Some(0.0));
        assert_eq!(s.step(), 0.0);
    }

    #[test]
    fn duplicate_labels_collapse() {
        let s = PointScale::new(["a", "b", "a", "c"], 100.0);
        assert_eq!(s.len(), 3);
        assert_eq!(s.get("c"), Some(100.0));
    }

    #[test]
    fn nice_rounds_outward() {
        let y = LinearScale::new((9_300.0, 34_944.0), (100.0, 0.0)).nice(10);
        assert_eq!(y.domain(), (8_000.0, 36_000.0));
        let y = LinearScale::new((2_560.0, 5_302.0), (100.0, 0.0)).nice(10);
        assert_eq!(y.domain(), (2_400.0, 5_400.0));
        let y = LinearScale::new((0.23, 0.87), (1.0, 0.0)).nice(10);
        assert_eq!(y.domain(), (0.2, 0.9));
    }

    #[test]
    fn ticks_land_on_round_values() {
        let y = LinearScale::new((8_000.0, 36_000.0), (100.0, 0.0));
        assert_eq!(
            y.ticks(4),
            vec![10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0, 35_000.0]
        );
        let y = LinearScale::new((0.0, 1_000.0), (100.0, 0.0));
        assert_eq!(y.ticks(4), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1_000.0]);
    }

    #[test]
    fn all_zero_series_uses_fallback_domain() {
        let data = pts(&[0.0; 7]);
        let s = SeriesScales::new(&data, 600.0, 200.0, &ChartConfig::USAGE);
        assert!(s.all_zero);
        assert!(!s.draws_series());
        assert_eq!(s.y.domain(), (0.0, 1_000.0));
        let xs: Vec<f64> = data.iter().map(|p| s.x(&p.month)).collect();
        assert_eq!(xs.len(), 7);
        assert!(xs.iter().all(|x| x.is_finite()));
        assert_eq!(xs[6], s.inner_width);
        assert!(s.plot_all(&data).iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn customer_usage_domain_matches_browser_rendering() {
        let fx = Fixtures::seeded();
        let s = SeriesScales::new(fx.customer_record("1").usage, 600.0, 200.0, &ChartConfig::USAGE);
        assert_eq!(s.y.domain(), (8_000.0, 36_000.0));
        assert_eq!(s.inner_width, 588.0);
        assert_eq!(s.inner_height, 160.0);
    }

    #[test]
    fn partly_zero_series_still_draws() {
        let fx = Fixtures::seeded();
        let s = SeriesScales::new(fx.customer_record("3").usage, 600.0, 200.0, &ChartConfig::USAGE);
        assert!(s.draws_series());
        assert_eq!(s.y.domain().0, 0.0);
    }

    proptest! {
        #[test]
        fn larger_values_sit_higher(
            values in proptest::collection::vec(1.0f64..1e7, 2..7),
            height in 60.0f64..600.0,
        ) {
            let data = pts(&values);
            let s = SeriesScales::new(&data, 500.0, height, &ChartConfig::TERMINAL);
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let (y_min, y_max) = (s.y(min), s.y(max));
            prop_assert!((0.0..=s.inner_height).contains(&y_min));
            prop_assert!((0.0..=s.inner_height).contains(&y_max));
            if min < max {
                prop_assert!(y_min > y_max);
            }
        }
    }
}

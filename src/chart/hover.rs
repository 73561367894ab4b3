//! Resolves a pointer position on the chart to the nearest data point.
//!
//! Labels on a point scale are evenly spaced, so the nearest label is a
//! rounded division. Non-uniform spacing would need a search over the
//! positions instead.

use crate::chart::scale::SeriesScales;
use crate::shared::types::SeriesPoint;
use crate::utils::format::format_number;

/// Index of the point closest to `offset_x` (pixels from the left edge of the
/// inner drawing area), clamped to the series. `None` for an empty series.
pub fn nearest_index(offset_x: f64, count: usize, inner_width: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if count == 1 {
        return Some(0);
    }
    let step = inner_width / (count - 1) as f64;
    if !(step > 0.0) || offset_x.is_nan() {
        return Some(0);
    }
    let idx = (offset_x / step).round();
    Some(idx.clamp(0.0, (count - 1) as f64) as usize)
}

/// The hovered point and where its marker sits, in inner-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub index: usize,
    pub point: SeriesPoint,
    pub x: f64,
    pub y: f64,
}

impl HoverTarget {
    pub fn resolve(scales: &SeriesScales, points: &[SeriesPoint], offset_x: f64) -> Option<Self> {
        let index = nearest_index(offset_x, points.len(), scales.inner_width)?;
        let point = points.get(index)?.clone();
        let (x, y) = scales.plot(&point);
        Some(Self { index, point, x, y })
    }

    pub fn label(&self) -> &str {
        &self.point.month
    }

    /// Tooltip heading: the month, followed by `period` when one is given.
    pub fn title(&self, period: &str) -> String {
        if period.is_empty() {
            self.point.month.clone()
        } else {
            format!("{} {period}", self.point.month)
        }
    }

    /// Untransformed value with thousands separators.
    pub fn value_label(&self) -> String {
        format_number(self.point.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::shared::fixtures::Fixtures;
    use proptest::prelude::*;

    #[test]
    fn single_point_always_resolves_to_it() {
        assert_eq!(nearest_index(-50.0, 1, 300.0), Some(0));
        assert_eq!(nearest_index(999.0, 1, 300.0), Some(0));
        assert_eq!(nearest_index(10.0, 0, 300.0), None);
    }

    #[test]
    fn zero_width_does_not_divide_by_zero() {
        assert_eq!(nearest_index(10.0, 7, 0.0), Some(0));
        assert_eq!(nearest_index(f64::NAN, 7, 100.0), Some(0));
    }

    #[test]
    fn midpoints_round_to_the_nearer_neighbour() {
        // step = 100
        assert_eq!(nearest_index(49.0, 7, 600.0), Some(0));
        assert_eq!(nearest_index(51.0, 7, 600.0), Some(1));
        assert_eq!(nearest_index(349.9, 7, 600.0), Some(3));
    }

    #[test]
    fn hovering_fourth_month_shows_its_value() {
        let fx = Fixtures::seeded();
        let usage = fx.customer_record("1").usage;
        let scales = SeriesScales::new(usage, 600.0, 200.0, &ChartConfig::USAGE);
        let x = scales.x.position(3);
        let hit = HoverTarget::resolve(&scales, usage, x).expect("hit");
        assert_eq!(hit.index, 3);
        assert_eq!(hit.label(), "Nov");
        assert_eq!(hit.value_label(), "22,100");
        assert_eq!(hit.x, x);
        assert_eq!(hit.y, scales.y(22_100.0));
        assert_eq!(hit.title("2025"), "Nov 2025");
        assert_eq!(hit.title(""), "Nov");
    }

    #[test]
    fn all_zero_series_still_resolves() {
        let zeros: Vec<SeriesPoint> = ["Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]
            .into_iter()
            .map(|m| SeriesPoint::new(m, 0.0))
            .collect();
        let scales = SeriesScales::new(&zeros, 600.0, 200.0, &ChartConfig::USAGE);
        assert!(!scales.draws_series());
        let hit = HoverTarget::resolve(&scales, &zeros, scales.x.position(2)).expect("hit");
        assert_eq!(hit.index, 2);
        assert_eq!(hit.value_label(), "0");
        assert_eq!(hit.title("2025"), "Oct 2025");
        assert_eq!(hit.y, scales.inner_height);
    }

    proptest! {
        #[test]
        fn exact_positions_resolve_exactly(n in 2usize..40, width in 1.0f64..4000.0) {
            let step = width / (n - 1) as f64;
            for i in 0..n {
                prop_assert_eq!(nearest_index(i as f64 * step, n, width), Some(i));
            }
        }

        #[test]
        fn out_of_bounds_clamps(n in 2usize..40, width in 1.0f64..4000.0, over in 0.001f64..1e6) {
            prop_assert_eq!(nearest_index(-over, n, width), Some(0));
            prop_assert_eq!(nearest_index(width + over, n, width), Some(n - 1));
        }
    }
}

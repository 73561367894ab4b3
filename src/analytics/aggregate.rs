//! Summary numbers over fixture slices. Nothing here mutates its input and
//! every function is total: empty inputs and zero denominators yield 0.

use std::iter::Sum;

use crate::shared::money::Money;

/// Sums `selector(r)` over the records accepted by `predicate`.
pub fn sum_where<T, N, P, S>(records: &[T], predicate: P, selector: S) -> N
where
    N: Sum<N>,
    P: Fn(&T) -> bool,
    S: Fn(&T) -> N,
{
    records.iter().filter(|r| predicate(r)).map(selector).sum()
}

pub fn count_where<T, P>(records: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    records.iter().filter(|r| predicate(r)).count()
}

/// Arithmetic mean of `selector(r)` over the accepted records, or `0.0` when
/// nothing is accepted.
pub fn average_where<T, P, S>(records: &[T], predicate: P, selector: S) -> f64
where
    P: Fn(&T) -> bool,
    S: Fn(&T) -> f64,
{
    let (sum, n) = records
        .iter()
        .filter(|r| predicate(r))
        .fold((0.0, 0usize), |(sum, n), r| (sum + selector(r), n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Rounded percentage of `used` against `limit`. A zero limit means
/// "unlimited" and reports 0%.
pub fn percent_of(used: f64, limit: f64) -> u32 {
    if limit <= 0.0 || !used.is_finite() || !limit.is_finite() {
        return 0;
    }
    (used / limit * 100.0).round().max(0.0) as u32
}

/// Share of billed money that was collected, rounded; 0 when nothing was billed.
pub fn collection_rate(paid: Money, billed: Money) -> u32 {
    if billed.cents() <= 0 {
        return 0;
    }
    ((paid.cents() as f64 / billed.cents() as f64) * 100.0)
        .round()
        .max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sums_only_accepted_records() {
        let xs = [1u32, 2, 3, 4, 5];
        let even: u32 = sum_where(&xs, |x| x % 2 == 0, |x| *x);
        assert_eq!(even, 6);
        let none: u32 = sum_where(&[] as &[u32], |_| true, |x| *x);
        assert_eq!(none, 0);
    }

    #[test]
    fn sums_money() {
        let xs = [Money::from_dollars(2), Money::from_cents(50)];
        let total: Money = sum_where(&xs, |_| true, |m| *m);
        assert_eq!(total, Money::from_cents(250));
    }

    #[test]
    fn average_of_empty_subset_is_zero() {
        assert_eq!(average_where(&[1.0, 2.0], |_| false, |x| *x), 0.0);
        assert_eq!(average_where(&[1.0, 2.0, 6.0], |_| true, |x| *x), 3.0);
    }

    #[test]
    fn collection_rate_guards_zero_billing() {
        assert_eq!(collection_rate(Money::ZERO, Money::ZERO), 0);
        assert_eq!(
            collection_rate(Money::from_dollars(2_580), Money::from_dollars(7_880)),
            33
        );
        assert_eq!(
            collection_rate(Money::from_dollars(10), Money::from_dollars(10)),
            100
        );
    }

    proptest! {
        #[test]
        fn unlimited_limit_reports_zero(used in 0.0f64..1e9) {
            prop_assert_eq!(percent_of(used, 0.0), 0);
        }

        #[test]
        fn nothing_used_reports_zero(limit in 1e-3f64..1e9) {
            prop_assert_eq!(percent_of(0.0, limit), 0);
        }

        #[test]
        fn fully_used_reports_hundred(limit in 1e-3f64..1e9) {
            prop_assert_eq!(percent_of(limit, limit), 100);
        }

        #[test]
        fn count_matches_sum_of_ones(xs in proptest::collection::vec(0u8..10, 0..50)) {
            let ones: usize = sum_where(&xs, |x| *x > 4, |_| 1usize);
            prop_assert_eq!(count_where(&xs, |x| *x > 4), ones);
        }
    }
}

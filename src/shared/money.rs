use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::format::group_thousands;

/// An exact USD amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

fn regex() -> &'static Regex {
    static REGEX: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| {
        Regex::new(r"^\s*(-)?\s*\$?\s*(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d{1,2}))?\s*$").unwrap()
    });
    &REGEX
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Parses a display amount such as `$2,400.00`, `$890` or `0.45`.
    /// Grouping commas must sit on thousands boundaries.
    pub fn parse(display: &str) -> Option<Money> {
        let caps = regex().captures(display)?;
        let negative = caps.get(1).is_some();
        let whole: i64 = caps.get(2)?.as_str().replace(',', "").parse().ok()?;
        let cents: i64 = match caps.get(3).map(|m| m.as_str()) {
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().ok()? * 10,
            Some(frac) => frac.parse().ok()?,
            None => 0,
        };
        let total = whole.checked_mul(100)?.checked_add(cents)?;
        Some(Money(if negative { -total } else { total }))
    }

    /// `$2,400` when the amount is whole, `$1,714.08` otherwise.
    pub fn short(self) -> String {
        if self.0 % 100 == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{sign}${}", group_thousands(self.0.unsigned_abs() / 100))
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_display_strings() {
        assert_eq!(Money::parse("$2,400.00"), Some(Money::from_cents(240_000)));
        assert_eq!(Money::parse("$890"), Some(Money::from_dollars(890)));
        assert_eq!(Money::parse("$0.45"), Some(Money::from_cents(45)));
        assert_eq!(Money::parse("1,714.08"), Some(Money::from_cents(171_408)));
        assert_eq!(Money::parse("$3.1"), Some(Money::from_cents(310)));
        assert_eq!(Money::parse("-$12.50"), Some(Money::from_cents(-1_250)));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("$"), None);
        assert_eq!(Money::parse("$2,40.00"), None);
        assert_eq!(Money::parse("$1.234"), None);
        assert_eq!(Money::parse("twelve"), None);
    }

    #[test]
    fn formats_for_display() {
        assert_eq!(Money::from_cents(240_000).to_string(), "$2,400.00");
        assert_eq!(Money::from_cents(45).to_string(), "$0.45");
        assert_eq!(Money::from_cents(240_000).short(), "$2,400");
        assert_eq!(Money::from_cents(171_408).short(), "$1,714.08");
        assert_eq!(Money::ZERO.short(), "$0");
        assert_eq!(Money::from_cents(-1_250).to_string(), "-$12.50");
    }

    #[test]
    fn sums_exactly() {
        let parts = ["$1,714.08", "$305.60", "$76.44", "$3.10"];
        let total: Money = parts.iter().filter_map(|s| Money::parse(s)).sum();
        assert_eq!(total, Money::from_cents(209_922));
        assert_eq!(total.to_string(), "$2,099.22");
    }
}

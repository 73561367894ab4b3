pub fn pad2(n: u32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders a value the way an en-US number locale does: grouped integer part,
/// at most three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let scaled = (value.abs() * 1_000.0).round() as u64;
    let whole = scaled / 1_000;
    let frac = scaled % 1_000;
    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}{}", group_thousands(whole))
    } else {
        let digits = format!("{:03}", frac);
        format!("{sign}{}.{}", group_thousands(whole), digits.trim_end_matches('0'))
    }
}

pub fn format_dollars(value: u32) -> String {
    format!("${}", group_thousands(value as u64))
}

/// `27800` -> `"27.8K"`, `4_200_000` -> `"4.2M"`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        return format_number(value);
    };
    if (scaled * 10.0).round() % 10.0 == 0.0 {
        format!("{}{}", scaled.round() as i64, suffix)
    } else {
        format!("{:.1}{}", scaled, suffix)
    }
}

pub fn format_percent(pct: u32) -> String {
    format!("{pct}%")
}

#[cfg(feature = "web")]
pub fn clock_now() -> String {
    use js_sys::Date;
    let d = Date::new_0();
    format!(
        "{}:{}:{}",
        pad2(d.get_hours()),
        pad2(d.get_minutes()),
        pad2(d.get_seconds())
    )
}

#[cfg(not(feature = "web"))]
pub fn clock_now() -> String {
    use chrono::{Local, Timelike};
    let n = Local::now();
    format!("{}:{}:{}", pad2(n.hour()), pad2(n.minute()), pad2(n.second()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(22_100), "22,100");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_numbers_like_the_browser_locale() {
        assert_eq!(format_number(22_100.0), "22,100");
        assert_eq!(format_number(4_820.0), "4,820");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1_234.5), "1,234.5");
        assert_eq!(format_number(3.14159), "3.142");
        assert_eq!(format_number(-1_500.0), "-1,500");
        assert_eq!(format_number(f64::NAN), "—");
    }

    #[test]
    fn formats_compact() {
        assert_eq!(format_compact(27_800.0), "27.8K");
        assert_eq!(format_compact(12_000.0), "12K");
        assert_eq!(format_compact(4_200_000.0), "4.2M");
        assert_eq!(format_compact(640.0), "640");
    }

    #[test]
    fn pads_clock_fields() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(clock_now().len(), 8);
    }
}

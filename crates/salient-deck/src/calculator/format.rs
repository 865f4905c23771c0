/// Compact dollar rendering used across the calculator panels.
///
/// `>= 1M` renders as `$X.XM`, `>= 1K` as `$XK`, anything smaller as `$X`.
/// Negative amounts carry the sign ahead of the dollar sign (`-$8.6M`).
pub fn format_currency(value: f64) -> String {
    let magnitude = value.abs();
    let body = if magnitude >= 1_000_000.0 {
        format!("${:.1}M", (magnitude / 100_000.0).round() / 10.0)
    } else if magnitude >= 1_000.0 {
        format!("${}K", (magnitude / 1_000.0).round() as i64)
    } else {
        format!("${}", magnitude.round() as i64)
    };

    if value < 0.0 && body != "$0" {
        format!("-{body}")
    } else {
        body
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Renders an input value with its field prefix and suffix, e.g. `$60M` or `30 min`.
pub fn format_input(prefix: &str, value: f64, suffix: &str) -> String {
    format!("{prefix}{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_millions_thousands_and_units() {
        assert_eq!(format_currency(1_900_000.0), "$1.9M");
        assert_eq!(format_currency(90_000.0), "$90K");
        assert_eq!(format_currency(500.0), "$500");
    }

    #[test]
    fn currency_boundaries() {
        assert_eq!(format_currency(1_000_000.0), "$1.0M");
        assert_eq!(format_currency(999_999.0), "$1000K");
        assert_eq!(format_currency(1_000.0), "$1K");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(3_347_456.0), "$3.3M");
        assert_eq!(format_currency(147_456.0), "$147K");
    }

    #[test]
    fn negative_currency_keeps_scale_and_leads_with_sign() {
        assert_eq!(format_currency(-2_000_000.0), "-$2.0M");
        assert_eq!(format_currency(-8_640_000.0), "-$8.6M");
        assert_eq!(format_currency(-90_000.0), "-$90K");
        assert_eq!(format_currency(-500.0), "-$500");
        assert_eq!(format_currency(-0.4), "$0");
        assert_eq!(format_currency(-0.0), "$0");
    }

    #[test]
    fn percent_and_input_rendering() {
        assert_eq!(format_percent(80.0), "80%");
        assert_eq!(format_input("$", 60.0, "M"), "$60M");
        assert_eq!(format_input("", 4.5, " min"), "4.5 min");
    }
}

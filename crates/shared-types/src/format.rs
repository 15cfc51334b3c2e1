//! Number formatting for labels and the quote header

/// `$` followed by the value with exactly two decimals, no grouping.
pub fn format_usd(value: f64) -> String {
    format!("${value:.2}")
}

/// Two fixed decimals, used for the percentage change.
pub fn format_fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// en-US grouped number with up to `max_fraction_digits` decimals and no
/// trailing zeros, e.g. `67234.1234` → `67,234.123`.
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(35123.456), "$35123.46");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(67234.1234, 3), "67,234.123");
        assert_eq!(format_grouped(1_234_567.0, 3), "1,234,567");
        assert_eq!(format_grouped(999.5, 3), "999.5");
        assert_eq!(format_grouped(0.0, 3), "0");
        assert_eq!(format_grouped(-1500.25, 3), "-1,500.25");
        assert_eq!(format_grouped(-0.0001, 3), "0");
        assert_eq!(format_grouped(f64::NAN, 3), "NaN");
    }
}

use crate::Value;

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number the way an en-US `toLocaleString()` does: grouped by
/// thousands, at most three fraction digits, trailing zeros dropped.
///
/// Rounding works on the shortest decimal form of the value with ties away
/// from zero, so `0.0625` gives `"0.063"` rather than the binary-exact `"0.062"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let (int_part, frac_part) = round_fraction(int_part, frac_part);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() * 2 + frac_part.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Numbers are grouped; text passes through untouched.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(v) => format_number(*v),
        Value::Text(s) => (*s).to_string(),
    }
}

/// Shortest plain rendering: integral values lose their `.0`.
pub fn format_raw(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Whole-percent label for a `0.0..=1.0` fraction, e.g. `0.3218` -> `"32%"`.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "0%".to_string();
    }
    format!("{:.0}%", fraction * 100.0)
}

/// Cuts the fraction to `MAX_FRACTION_DIGITS`, carrying into the integer
/// digits when the first dropped digit is 5 or more.
fn round_fraction(int_part: &str, frac_part: &str) -> (String, String) {
    if frac_part.len() <= MAX_FRACTION_DIGITS {
        return (int_part.to_string(), frac_part.to_string());
    }
    let round_up = frac_part.as_bytes()[MAX_FRACTION_DIGITS] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(MAX_FRACTION_DIGITS))
        .collect();
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, b'1');
                break;
            }
            idx -= 1;
            if digits[idx] == b'9' {
                digits[idx] = b'0';
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }
    let split = digits.len() - MAX_FRACTION_DIGITS;
    let text: String = digits.iter().map(|&d| char::from(d)).collect();
    let (int_digits, frac_digits) = text.split_at(split);
    (int_digits.to_string(), frac_digits.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integers_by_thousands() {
        assert_eq!(format_number(550000.0), "550,000");
        assert_eq!(format_number(22000.0), "22,000");
        assert_eq!(format_number(1200.0), "1,200");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1234567890.0), "1,234,567,890");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(3.14159), "3.142");
        assert_eq!(format_number(2.0004), "2");
    }

    #[test]
    fn rounds_the_decimal_form_half_away_from_zero() {
        assert_eq!(format_number(0.0625), "0.063");
        assert_eq!(format_number(1.0005), "1.001");
        assert_eq!(format_number(0.9995), "1");
        assert_eq!(format_number(999.9996), "1,000");
        assert_eq!(format_number(-2.0625), "-2.063");
        assert_eq!(format_number(-0.0001), "-0");
        assert_eq!(format_number(0.0000001), "0");
    }

    #[test]
    fn negative_and_non_finite() {
        assert_eq!(format_number(-16500.0), "-16,500");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(format_value(&Value::Text("N/A")), "N/A");
        assert_eq!(format_value(&Value::Text("1000")), "1000");
        assert_eq!(format_value(&Value::Number(465000.0)), "465,000");
    }

    #[test]
    fn raw_and_percent() {
        assert_eq!(format_raw(5200.0), "5200");
        assert_eq!(format_raw(42.5), "42.5");
        assert_eq!(format_raw(999_999_999_999_999.0), "999999999999999");
        assert_eq!(format_raw(1e15), "1000000000000000");
        assert_eq!(format_raw(-1e15), "-1000000000000000");
        assert_eq!(format_percent(0.32), "32%");
        assert_eq!(format_percent(0.18), "18%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }
}

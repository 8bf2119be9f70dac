//! Numeric reconstruction for values the wire format carries as plain JSON
//! numbers.
//!
//! The service writes `5` and `5.0` interchangeably and a generic decoder
//! cannot tell an integer literal from a fractional one, so target values
//! are re-rendered from their mathematical value: integral numbers become
//! integer text with no fractional suffix, everything else the shortest
//! round-trip decimal.

use serde_json::Number;

const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Exact test, no epsilon: the fractional part must be zero.
pub fn is_mathematical_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Render a target value the way the service would write it by hand.
pub fn target_value_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(value) => format_target_f64(value),
        None => number.to_string(),
    }
}

/// Format a finite f64 as canonical decimal text.
/// - integral values carry no fractional suffix (`5.0` -> `5`)
/// - no exponent notation
/// - -0 normalized to 0
pub fn format_target_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_target_f64 called with non-finite value");
        return String::from("null");
    }
    if is_mathematical_integer(value) && (I64_LOWER..I64_UPPER).contains(&value) {
        return (value as i64).to_string();
    }

    let mut sign_prefix = "";
    let mut magnitude = value;
    if magnitude < 0.0 {
        sign_prefix = "-";
        magnitude = -magnitude;
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let trimmed = trim_fraction(body);
    let mut out = String::with_capacity(sign_prefix.len() + trimmed.len());
    out.push_str(sign_prefix);
    out.push_str(&trimmed);
    out
}

/// Truncate toward zero, saturating at the i64 bounds.
pub fn truncate_cooldown(number: &Number) -> i64 {
    if let Some(i) = number.as_i64() {
        return i;
    }
    if number.is_u64() {
        return i64::MAX;
    }
    number.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits = Vec::with_capacity(mantissa.len());
    let mut point_index = None;
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point_index = Some(digits.len());
        } else {
            digits.push(b);
        }
    }
    let point_index = point_index.unwrap_or(digits.len()) as i32;
    let target = point_index + exp;

    let mut result = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if target <= 0 {
        result.push_str("0.");
        for _ in 0..(-target) {
            result.push('0');
        }
        result.extend(digits.iter().map(|&d| d as char));
    } else if target as usize >= digits.len() {
        result.extend(digits.iter().map(|&d| d as char));
        for _ in digits.len()..target as usize {
            result.push('0');
        }
    } else {
        let split = target as usize;
        for (idx, &d) in digits.iter().enumerate() {
            if idx == split {
                result.push('.');
            }
            result.push(d as char);
        }
    }
    result
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot_pos) = s.find('.') {
        let mut end = s.len();
        while end > dot_pos + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if end > dot_pos && s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

//! Number parsing and rendering for size display
//!
//! Sizes arrive as loosely formatted text (`"4109865159"`, `" 512 bytes"`,
//! `"1.5e9"`), so parsing reads the longest numeric prefix instead of
//! rejecting trailing junk. Rendering produces the shortest decimal form
//! that round-trips, switching to exponent notation for very large or
//! very small magnitudes.

/// Magnitude at which fixed-point rendering gives way to exponent notation
const FIXED_LIMIT: f64 = 1e21;

const MIDPOINT_EIGHTHS: [f64; 4] = [0.125, 0.375, 0.625, 0.875];

/// Parse the longest floating-point prefix of `input`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent and the literal `Infinity`.
/// Returns `None` when no digits can be read.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_leading_space);
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Unicode white space and line breaks, plus the byte order mark; NEL is
/// not skipped
fn is_leading_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render `value` as the shortest decimal string that round-trips
///
/// Integers print without a fraction (`512`), magnitudes from 1e21 upward
/// or below 1e-6 use exponent notation (`1e+21`, `1.5e-7`).
pub fn shortest(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits as `d.ddde<exp>`
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (whole, frac) = digits.split_at(n as usize);
        format!("{}.{}", whole, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, (n - 1).abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Render `value` with exactly two decimal places
///
/// Exact halves round away from zero (`1.125` becomes `1.13`). Values that
/// are not finite, or whose magnitude reaches 1e21, fall back to
/// [`shortest`].
pub fn fixed2(value: f64) -> String {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return shortest(value);
    }

    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    // A binary fraction sits exactly on a hundredths midpoint only at
    // eighths with an odd numerator.
    let frac = magnitude.fract();
    if MIDPOINT_EIGHTHS.contains(&frac) {
        let hundredths = (frac * 100.0).ceil() as u64;
        return format!("{}{}.{:02}", sign, magnitude.trunc() as u64, hundredths);
    }

    let rendered = format!("{:.2}", magnitude);
    if rendered == "0.00" {
        return rendered;
    }
    format!("{}{}", sign, rendered)
}

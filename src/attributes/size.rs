//! Human-scaled file size rendering

use super::SENTINEL;
use super::number::{fixed2, parse_float_prefix, shortest};

const GIB: f64 = 1_073_741_824.0;
const MIB: f64 = 1_048_576.0;
const KIB: f64 = 1024.0;

/// Units checked largest first; the first threshold reached wins
const UNITS: [(f64, &str); 3] = [(GIB, "G"), (MIB, "M"), (KIB, "K")];

/// A byte count as handed over by a model listing
///
/// Listings carry sizes either as text or as JSON numbers, so both are
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSize<'a> {
    Text(&'a str),
    Bytes(f64),
}

impl<'a> From<&'a str> for RawSize<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawSize<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<u64> for RawSize<'_> {
    fn from(value: u64) -> Self {
        Self::Bytes(value as f64)
    }
}

impl From<i64> for RawSize<'_> {
    fn from(value: i64) -> Self {
        Self::Bytes(value as f64)
    }
}

impl From<f64> for RawSize<'_> {
    fn from(value: f64) -> Self {
        Self::Bytes(value)
    }
}

/// Format a byte count as `2.00K`, `3.83G`, `512B`
///
/// Empty input, `"-"`, zero and NaN map to the `-` sentinel. Text that does
/// not start with a number is returned unchanged.
///
/// # Examples
/// ```
/// use model_attrs::format_file_size;
///
/// assert_eq!(format_file_size("2048"), "2.00K");
/// assert_eq!(format_file_size(4_109_865_159u64), "3.83G");
/// assert_eq!(format_file_size("512"), "512B");
/// assert_eq!(format_file_size("abc"), "abc");
/// ```
pub fn format_file_size<'a>(size: impl Into<RawSize<'a>>) -> String {
    match size.into() {
        RawSize::Text(text) => {
            if text.is_empty() || text == SENTINEL {
                return SENTINEL.to_string();
            }
            match parse_float_prefix(text) {
                Some(bytes) => scale(bytes),
                None => text.to_string(),
            }
        }
        RawSize::Bytes(bytes) => {
            if bytes == 0.0 || bytes.is_nan() {
                return SENTINEL.to_string();
            }
            scale(bytes)
        }
    }
}

fn scale(bytes: f64) -> String {
    for (threshold, suffix) in UNITS {
        if bytes >= threshold {
            return format!("{}{}", fixed2(bytes / threshold), suffix);
        }
    }
    format!("{}B", shortest(bytes))
}

//! Parameter count extraction (`llama2:7b` -> `7B`)

use regex::Regex;
use std::sync::OnceLock;

use super::SENTINEL;

fn param_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r":([0-9]+[bB])").expect("parameter size pattern is valid")
    })
}

/// Parameter count encoded after the first `:<digits>b` in a model name
///
/// The unit letter is normalised to `B`.
pub fn param_size(model_name: &str) -> Option<String> {
    param_pattern()
        .captures(model_name)
        .map(|caps| caps[1].to_ascii_uppercase())
}

/// Parameter count for display, `-` when the name carries none
pub fn parse_param_size(model_name: &str) -> String {
    param_size(model_name).unwrap_or_else(|| SENTINEL.to_string())
}

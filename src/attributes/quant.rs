//! Quantization format detection
//!
//! Model names encode their quantization in several places: as a hyphen
//! suffix (`llama3-q4_K_M`), right after the tag colon (`llama3:q8_0`), or
//! buried inside a tag (`llama3:8b-instruct-q4_0`). Patterns are tried in a
//! fixed order and the first hit wins. Hyphen forms outrank colon forms, and
//! multi-segment codes outrank simple ones under the same anchor.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::SENTINEL;

/// Where in the name a quantization code was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantAnchor {
    /// Directly after a `-`
    Hyphen,
    /// Directly after a `:`
    Colon,
    /// Somewhere inside the tag following the first `:`
    Tag,
}

/// Shape of a quantization code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantShape {
    /// `q4_K_M`, `q3_K`
    MultiSegment,
    /// `q4_0`, `q8_0`
    Simple,
    /// `fp16`, `fp32`
    FloatPrecision,
}

impl QuantShape {
    const ALL: [QuantShape; 3] = [Self::MultiSegment, Self::Simple, Self::FloatPrecision];

    fn pattern(self) -> &'static str {
        match self {
            Self::MultiSegment => r"q[0-9]+(?:_[A-Z]+)+",
            Self::Simple => r"q[0-9]+_[0-9]",
            Self::FloatPrecision => r"fp[0-9]+",
        }
    }
}

/// A detected quantization code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantMatch {
    /// Code without its anchor character, or the whole tag for [`QuantAnchor::Tag`]
    pub code: String,
    pub anchor: QuantAnchor,
    pub shape: QuantShape,
}

struct QuantPattern {
    anchor: QuantAnchor,
    shape: QuantShape,
    regex: Regex,
}

struct QuantPatterns {
    /// Anchored patterns in priority order
    ordered: Vec<QuantPattern>,
    /// Text after the first `:` up to the next `-` or end of input
    tag: Regex,
    /// Unanchored shapes used to vet the tag
    shapes: Vec<(QuantShape, Regex)>,
}

impl QuantPatterns {
    fn compile() -> Self {
        let mut ordered = Vec::with_capacity(6);
        for (anchor, prefix) in [(QuantAnchor::Hyphen, "-"), (QuantAnchor::Colon, ":")] {
            for shape in QuantShape::ALL {
                let regex = Regex::new(&format!("{}({})", prefix, shape.pattern()))
                    .expect("quantization pattern is valid");
                ordered.push(QuantPattern {
                    anchor,
                    shape,
                    regex,
                });
            }
        }

        let shapes = QuantShape::ALL
            .into_iter()
            .map(|shape| {
                let regex = Regex::new(shape.pattern()).expect("quantization shape is valid");
                (shape, regex)
            })
            .collect();

        Self {
            ordered,
            tag: Regex::new(r":([^\n\r\x{2028}\x{2029}]*?)(?:-|$)")
                .expect("tag pattern is valid"),
            shapes,
        }
    }
}

fn patterns() -> &'static QuantPatterns {
    static PATTERNS: OnceLock<QuantPatterns> = OnceLock::new();
    PATTERNS.get_or_init(QuantPatterns::compile)
}

/// Detect the quantization code in a model name
pub fn detect_quantization(model_name: &str) -> Option<QuantMatch> {
    let patterns = patterns();

    for pattern in &patterns.ordered {
        if let Some(caps) = pattern.regex.captures(model_name) {
            return Some(QuantMatch {
                code: caps[1].to_string(),
                anchor: pattern.anchor,
                shape: pattern.shape,
            });
        }
    }

    // Best-effort: accept the whole tag if it contains a code anywhere
    let tag = patterns.tag.captures(model_name)?.get(1)?.as_str();
    patterns
        .shapes
        .iter()
        .find(|(_, regex)| regex.is_match(tag))
        .map(|(shape, _)| QuantMatch {
            code: tag.to_string(),
            anchor: QuantAnchor::Tag,
            shape: *shape,
        })
}

/// Quantization code for display, `-` when none is found
pub fn parse_quantization(model_name: &str) -> String {
    detect_quantization(model_name)
        .map(|found| found.code)
        .unwrap_or_else(|| SENTINEL.to_string())
}

//! Display attributes derived from model names
//!
//! Provides pure helpers for:
//! - Parameter count (`llama2:7b` -> `7B`)
//! - File size (`4109865159` -> `3.83G`)
//! - Model family (`library/llama-7b` -> `llama`)
//! - Quantization (`llama3-q4_K_M` -> `q4_K_M`)
//!
//! Every helper is total: malformed input yields the [`SENTINEL`] (or, for
//! sizes, the original text) rather than an error.

pub mod family;
pub mod number;
pub mod param;
pub mod quant;
pub mod size;

pub use family::{model_family, parse_model_family};
pub use param::{param_size, parse_param_size};
pub use quant::{QuantAnchor, QuantMatch, QuantShape, detect_quantization, parse_quantization};
pub use size::{RawSize, format_file_size};

use serde::Serialize;

/// Display value for an attribute that could not be determined
pub const SENTINEL: &str = "-";

/// All display attributes of a single model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelAttributes {
    pub name: String,
    pub param_size: String,
    pub family: String,
    pub quantization: String,
    pub size: String,
}

impl ModelAttributes {
    /// Derive every attribute from a model name and its raw size
    pub fn derive<'a>(name: &str, size: impl Into<RawSize<'a>>) -> Self {
        Self {
            name: name.to_string(),
            param_size: parse_param_size(name),
            family: parse_model_family(name),
            quantization: parse_quantization(name),
            size: format_file_size(size),
        }
    }
}

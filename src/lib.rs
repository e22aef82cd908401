//! Model Attrs - display attributes from model names
//!
//! Derives parameter size, family, quantization and human-scaled file size
//! from model names and byte counts as they appear in model inventories
//! such as an Ollama `/api/tags` response.

pub mod attributes;
pub mod config;
pub mod display;
pub mod error;
pub mod listing;

pub use attributes::{
    ModelAttributes, QuantAnchor, QuantMatch, QuantShape, RawSize, SENTINEL, detect_quantization,
    format_file_size, model_family, param_size, parse_model_family, parse_param_size,
    parse_quantization,
};
pub use config::{DisplayConfig, OutputFormat, SortBy};
pub use error::{AttrsError, AttrsResult};
pub use listing::{ListedModel, ModelListing, ModelRow, load_listing, parse_listing, sort_rows};

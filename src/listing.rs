//! Model listing input
//!
//! Reads model inventories shaped like an Ollama `/api/tags` response:
//! ```json
//! {"models": [{"name": "llama3:8b", "size": 4661224676, "digest": "...", "modified_at": "..."}]}
//! ```
//! Fields other than the ones below are ignored, so full server responses
//! can be piped in unchanged.

use crate::attributes::number::parse_float_prefix;
use crate::attributes::{ModelAttributes, RawSize, SENTINEL};
use crate::config::SortBy;
use crate::error::{AttrsError, AttrsResult};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A model inventory document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelListing {
    #[serde(default)]
    pub models: Vec<ListedModel>,
}

/// One model as it appears in a listing
///
/// `size` and `modified_at` are kept loosely typed so a single odd entry
/// degrades to `-` instead of rejecting the whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct ListedModel {
    pub name: String,

    /// Byte count, as a JSON number or string
    #[serde(default)]
    pub size: Option<serde_json::Value>,

    #[serde(default)]
    pub digest: Option<String>,

    /// RFC 3339 timestamp
    #[serde(default)]
    pub modified_at: Option<serde_json::Value>,
}

impl ListedModel {
    /// Size in the form accepted by [`crate::format_file_size`]
    ///
    /// Values that are neither numbers nor strings count as unknown.
    pub fn raw_size(&self) -> RawSize<'_> {
        match &self.size {
            Some(serde_json::Value::String(text)) => RawSize::Text(text),
            Some(serde_json::Value::Number(n)) => match n.as_f64() {
                Some(bytes) => RawSize::Bytes(bytes),
                None => RawSize::Text(SENTINEL),
            },
            None | Some(serde_json::Value::Null) => RawSize::Text(SENTINEL),
            Some(other) => {
                tracing::warn!(model = %self.name, size = %other, "Ignoring non-numeric size");
                RawSize::Text(SENTINEL)
            }
        }
    }

    /// Modification time as `YYYY-MM-DD HH:MM`
    ///
    /// Text that is not RFC 3339 is shown as-is; empty or non-text values
    /// give `-`.
    pub fn modified(&self) -> String {
        match &self.modified_at {
            Some(serde_json::Value::String(text)) if !text.is_empty() => {
                match DateTime::parse_from_rfc3339(text) {
                    Ok(at) => at.format("%Y-%m-%d %H:%M").to_string(),
                    Err(_) => text.clone(),
                }
            }
            _ => SENTINEL.to_string(),
        }
    }
}

/// A listed model with its derived display attributes
#[derive(Debug, Clone, Serialize)]
pub struct ModelRow {
    #[serde(flatten)]
    pub attributes: ModelAttributes,

    /// Leading characters of the digest, `-` when absent
    pub digest: String,

    /// Modification time as `YYYY-MM-DD HH:MM`, `-` when absent
    pub modified: String,

    /// Numeric byte count when one could be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<f64>,
}

impl ModelListing {
    /// Derive one row per listed model, keeping input order
    pub fn rows(&self, digest_chars: usize) -> Vec<ModelRow> {
        self.models
            .iter()
            .map(|model| {
                let raw = model.raw_size();
                let size_bytes = match raw {
                    RawSize::Bytes(bytes) => Some(bytes),
                    RawSize::Text(text) => parse_float_prefix(text),
                };

                ModelRow {
                    attributes: ModelAttributes::derive(&model.name, raw),
                    digest: short_digest(model.digest.as_deref(), digest_chars),
                    modified: model.modified(),
                    size_bytes,
                }
            })
            .collect()
    }
}

fn short_digest(digest: Option<&str>, chars: usize) -> String {
    match digest {
        Some(digest) if !digest.is_empty() && chars > 0 => {
            // Strip an algorithm prefix such as `sha256:`
            let hex = digest.rsplit(':').next().unwrap_or(digest);
            hex.chars().take(chars).collect()
        }
        _ => SENTINEL.to_string(),
    }
}

/// Order rows in place
///
/// Size sorting is largest first; rows without a readable size go last.
/// Sorting is stable, so equal keys keep their listing order.
pub fn sort_rows(rows: &mut [ModelRow], sort_by: SortBy) {
    match sort_by {
        SortBy::None => {}
        SortBy::Name => rows.sort_by(|a, b| a.attributes.name.cmp(&b.attributes.name)),
        SortBy::Size => rows.sort_by(|a, b| match (a.size_bytes, b.size_bytes) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
    }
}

/// Parse a listing document
pub fn parse_listing(json: &str) -> AttrsResult<ModelListing> {
    serde_json::from_str(json).map_err(AttrsError::InvalidListing)
}

/// Load a listing from a file, or from stdin when `path` is `None` or `-`
pub fn load_listing(path: Option<&Path>) -> AttrsResult<ModelListing> {
    let content = match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| AttrsError::Read {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(AttrsError::Stdin)?;
            buf
        }
    };

    let listing = parse_listing(&content)?;
    tracing::debug!(
        source = ?path,
        count = listing.models.len(),
        "Loaded model listing"
    );

    Ok(listing)
}

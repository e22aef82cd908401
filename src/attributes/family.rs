//! Model family extraction (`org/llama-7b:q4_0` -> `llama`)

use super::SENTINEL;

/// Family of a namespaced model name
///
/// Only names with a `/` namespace have a family. The family is the part of
/// the second path segment before any `:` tag and before the first `-`.
pub fn model_family(model_name: &str) -> Option<&str> {
    let name_part = model_name.split('/').nth(1)?;
    let untagged = name_part.split(':').next().unwrap_or_default();
    let family = untagged.split('-').next().unwrap_or_default();

    (!family.is_empty()).then_some(family)
}

/// Family for display, `-` when it cannot be determined
pub fn parse_model_family(model_name: &str) -> String {
    model_family(model_name)
        .map(str::to_string)
        .unwrap_or_else(|| SENTINEL.to_string())
}

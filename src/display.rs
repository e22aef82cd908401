//! Output rendering for derived attributes

use crate::attributes::ModelAttributes;
use crate::config::OutputFormat;
use crate::error::{AttrsError, AttrsResult};
use crate::listing::ModelRow;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct ListingRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Params")]
    param_size: &'a str,
    #[tabled(rename = "Family")]
    family: &'a str,
    #[tabled(rename = "Quant")]
    quantization: &'a str,
    #[tabled(rename = "Size")]
    size: &'a str,
    #[tabled(rename = "Digest")]
    digest: &'a str,
    #[tabled(rename = "Modified")]
    modified: &'a str,
}

#[derive(Tabled)]
struct AttributeRow {
    #[tabled(rename = "Attribute")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render listing rows as a table or JSON array
pub fn render_rows(rows: &[ModelRow], format: OutputFormat) -> AttrsResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows).map_err(AttrsError::Encode),
        OutputFormat::Table => {
            let table_rows = rows.iter().map(|row| ListingRow {
                name: &row.attributes.name,
                param_size: &row.attributes.param_size,
                family: &row.attributes.family,
                quantization: &row.attributes.quantization,
                size: &row.attributes.size,
                digest: &row.digest,
                modified: &row.modified,
            });
            Ok(Table::new(table_rows).with(Style::rounded()).to_string())
        }
    }
}

/// Render the attributes of a single model
pub fn render_attributes(attrs: &ModelAttributes, format: OutputFormat) -> AttrsResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(attrs).map_err(AttrsError::Encode),
        OutputFormat::Table => {
            let rows = [
                ("Name", &attrs.name),
                ("Params", &attrs.param_size),
                ("Family", &attrs.family),
                ("Quant", &attrs.quantization),
                ("Size", &attrs.size),
            ]
            .map(|(label, value)| AttributeRow {
                label,
                value: value.clone(),
            });
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
    }
}

//! Model Attrs - Main entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use model_attrs::{
    DisplayConfig, ModelAttributes, OutputFormat, SortBy, display, format_file_size, load_listing,
    parse_model_family, parse_param_size, parse_quantization, sort_rows,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "model-attrs")]
#[command(about = "Derive display attributes from model names", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override output format
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json or pretty)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parameter count from the tag, e.g. `llama2:7b` -> `7B`
    ParamSize { name: String },

    /// Human-scaled size of a byte count, e.g. `2048` -> `2.00K`
    FileSize { size: String },

    /// Family of a namespaced name, e.g. `org/llama-7b` -> `llama`
    Family { name: String },

    /// Quantization code, e.g. `llama3-q4_K_M` -> `q4_K_M`
    Quant { name: String },

    /// All attributes of one model
    Describe {
        name: String,

        /// Size in bytes
        #[arg(long, default_value = "-")]
        size: String,
    },

    /// Attributes of every model in a listing (`/api/tags` JSON)
    List {
        /// Listing file, stdin when omitted or `-`
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Override row ordering
        #[arg(long)]
        sort_by: Option<SortBy>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout carries results only
    match cli.log_format.as_str() {
        "pretty" => {
            tracing_subscriber::fmt()
                .with_env_filter(&cli.log_level)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(&cli.log_level)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
    }

    let mut config = DisplayConfig::load(cli.config)?;

    // CLI overrides
    if let Some(output) = cli.output {
        config.output_format = output;
    }

    config.validate()?;

    tracing::debug!(
        output_format = ?config.output_format,
        sort_by = ?config.sort_by,
        digest_chars = config.digest_chars,
        "Configuration loaded"
    );

    let rendered = match cli.command {
        Command::ParamSize { name } => parse_param_size(&name),
        Command::FileSize { size } => format_file_size(&size),
        Command::Family { name } => parse_model_family(&name),
        Command::Quant { name } => parse_quantization(&name),
        Command::Describe { name, size } => {
            let attrs = ModelAttributes::derive(&name, &size);
            display::render_attributes(&attrs, config.output_format)?
        }
        Command::List { input, sort_by } => {
            let listing = load_listing(input.as_deref()).context("Failed to load model listing")?;
            let mut rows = listing.rows(config.digest_chars);
            sort_rows(&mut rows, sort_by.unwrap_or(config.sort_by));

            tracing::info!(count = rows.len(), "Derived model attributes");
            display::render_rows(&rows, config.output_format)?
        }
    };

    println!("{}", rendered);

    Ok(())
}

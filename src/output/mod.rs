//! Output module for inspection results
//!
//! This module handles:
//! - Encoding results in the external JSON format
//! - Rendering markdown reports
//! - Writing either to a file or stdout

mod json;
mod markdown;

pub use json::{from_json, to_json};
pub use markdown::format_markdown_report;

use crate::model::ParsedInfo;
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Output formats supported by the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// External JSON format
    #[default]
    Json,
    /// Human-readable markdown report
    Markdown,
}

/// Renders a result in the requested format
pub fn render(info: &ParsedInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(info),
        OutputFormat::Markdown => Ok(format_markdown_report(info)),
    }
}

/// Renders a result and writes it to `output_path`
pub fn write_output(info: &ParsedInfo, format: OutputFormat, output_path: &Path) -> Result<()> {
    let rendered = render(info, format)?;

    let mut file = File::create(output_path)?;
    file.write_all(rendered.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

//! ui::render
//!
//! Formatting of metadata reports.

use crate::core::config::OutputFormat;
use crate::core::types::MetadataReport;

/// Render a report in the requested format.
///
/// The result ends without a trailing newline.
pub fn render(report: &MetadataReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

/// Render a report as indented text.
///
/// ```text
/// abc.jpg
///   Make: Canon
///   Model: EOS 5D
/// def.jpg
///   (no matching tags)
/// ```
pub fn render_text(report: &MetadataReport) -> String {
    let mut out = String::new();
    for (file, record) in report {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(file);
        if record.is_empty() {
            out.push_str("\n  (no matching tags)");
        }
        for (tag, value) in record {
            out.push_str(&format!("\n  {}: {}", tag, value));
        }
    }
    out
}

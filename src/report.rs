//! Human-readable header reports
//!
//! The default report prints the emphasis code and whether the media is
//! original and copyrighted. Verbose reports list every raw field followed
//! by its interpretation.

use crate::header::{FrameHeader, HeaderField};
use crate::tables;
use std::fmt::Write;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text lines
    #[default]
    Text,
    /// Pretty-printed JSON object
    #[cfg(feature = "json")]
    Json,
}

/// Report configuration
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// List every field instead of the summary lines
    pub verbose: bool,
    /// Output format
    pub format: OutputFormat,
}

impl ReportOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// "yes" or "no"
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Render a report for `header`
pub fn render(header: &FrameHeader, options: &ReportOptions) -> String {
    match options.format {
        OutputFormat::Text if options.verbose => render_verbose(header),
        OutputFormat::Text => render_summary(header),
        #[cfg(feature = "json")]
        OutputFormat::Json => render_json(header),
    }
}

fn render_summary(header: &FrameHeader) -> String {
    format!(
        "Emphasis:  {}\nOriginal copy:  {}\nIs copyrighted:  {}\n",
        header.emphasis,
        yes_no(header.is_original()),
        yes_no(header.is_copyrighted())
    )
}

fn render_verbose(header: &FrameHeader) -> String {
    let mut out = String::new();

    // write! into a String cannot fail
    for field in HeaderField::ALL {
        let _ = writeln!(
            out,
            "{:<20} {:>4}  ({:0width$b})",
            field.name(),
            header.get(field),
            header.get(field),
            width = field.width() as usize
        );
    }

    let version = header.version();
    let layer = header.layer();
    let mode = header.channel_mode();

    let _ = writeln!(out);
    let _ = writeln!(out, "Frame sync valid:  {}", yes_no(header.has_valid_sync()));
    let _ = writeln!(out, "Version:  {}", version);
    let _ = writeln!(out, "Layer:  {}", layer);
    let _ = writeln!(out, "CRC protected:  {}", yes_no(header.is_crc_protected()));
    match tables::sample_rate(version, header.sampling_rate_index) {
        Some(rate) => {
            let _ = writeln!(out, "Sampling rate:  {} Hz", rate);
        }
        None => {
            let _ = writeln!(out, "Sampling rate:  reserved");
        }
    }
    let _ = writeln!(out, "Padded:  {}", yes_no(header.is_padded()));
    let _ = writeln!(out, "Channel mode:  {}", mode);
    if mode.uses_mode_extension() {
        if let Some(ext) = tables::mode_extension(layer, header.mode_extension) {
            let _ = writeln!(out, "Mode extension:  {}", ext);
        }
    }
    let _ = writeln!(out, "Emphasis:  {}", header.emphasis());
    let _ = writeln!(out, "Original copy:  {}", yes_no(header.is_original()));
    let _ = writeln!(out, "Is copyrighted:  {}", yes_no(header.is_copyrighted()));
    out
}

#[cfg(feature = "json")]
fn render_json(header: &FrameHeader) -> String {
    let mut out = serde_json::to_string_pretty(header)
        .expect("FrameHeader holds only integer fields, which always serialize");
    out.push('\n');
    out
}

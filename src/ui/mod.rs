//! Terminal rendering of a [`Report`]
//!
//! Sections are separated by a blank line. Each starts with a `Title:` header,
//! followed by one `label: value` line per fact. Colour is applied with
//! crossterm escape sequences only when [`RenderConfig::color`] is set.

pub mod theme;

use crate::errors::ReportError;
use crate::report::{Line, Report, Section};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use theme::DEFAULT_THEME;
use tracing::debug;

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub color: bool,
}

impl RenderConfig {
    /// Colour when stdout is a terminal, plain text when piped
    pub fn detect() -> Self {
        RenderConfig {
            color: io::stdout().is_tty(),
        }
    }

    pub fn plain() -> Self {
        RenderConfig { color: false }
    }
}

/// Write the whole report to `out`
pub fn render<W: Write>(
    report: &Report,
    out: &mut W,
    config: &RenderConfig,
) -> Result<(), ReportError> {
    debug!(
        sections = report.sections.len(),
        color = config.color,
        "rendering report"
    );

    for (index, section) in report.sections.iter().enumerate() {
        if index > 0 {
            writeln!(out).map_err(ReportError::io("writing section separator"))?;
        }
        write_section(section, out, config)?;
    }

    out.flush().map_err(ReportError::io("flushing output"))
}

fn write_section<W: Write>(
    section: &Section,
    out: &mut W,
    config: &RenderConfig,
) -> Result<(), ReportError> {
    let header = format!("{}:", section.title);
    let written = if config.color {
        writeln!(out, "{}", header.with(DEFAULT_THEME.header).bold())
    } else {
        writeln!(out, "{}", header)
    };
    written.map_err(ReportError::io("writing section header"))?;

    for line in &section.lines {
        write_line(line, out, config)?;
    }
    Ok(())
}

fn write_line<W: Write>(line: &Line, out: &mut W, config: &RenderConfig) -> Result<(), ReportError> {
    let written = if config.color {
        writeln!(
            out,
            "{}: {}",
            line.label.as_str().with(DEFAULT_THEME.label),
            line.value.as_str().with(DEFAULT_THEME.value)
        )
    } else {
        writeln!(out, "{}", line)
    };
    written.map_err(ReportError::io("writing report line"))
}

/// Print a fatal error to stderr, coloured when stderr is a terminal
pub fn report_error(err: &ReportError) {
    let message = format!("Error: {}", err);
    if io::stderr().is_tty() {
        eprintln!("{}", message.with(DEFAULT_THEME.error));
    } else {
        eprintln!("{}", message);
    }
}

//! Error types for report output
//!
//! The demonstrations themselves cannot fail. [`ReportError`] covers the two
//! places where the binary touches the outside world: writing the report and
//! configuring diagnostics.

use std::fmt;
use std::io;

/// Errors that can occur while emitting a report
#[derive(Debug)]
pub enum ReportError {
    /// Writing to the output sink failed
    Io {
        context: &'static str,
        source: io::Error,
    },

    /// A built-in log filter directive failed to parse
    InvalidLogDirective { directive: String, message: String },
}

impl ReportError {
    /// Adapter for `map_err` on I/O results
    pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> ReportError {
        move |source| ReportError::Io { context, source }
    }

    /// Check whether the reader went away (e.g. `memlens | head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            ReportError::Io { source, .. } if source.kind() == io::ErrorKind::BrokenPipe
        )
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io { context, source } => {
                write!(f, "Output error while {}: {}", context, source)
            }
            ReportError::InvalidLogDirective { directive, message } => {
                write!(f, "Invalid log directive '{}': {}", directive, message)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io { source, .. } => Some(source),
            ReportError::InvalidLogDirective { .. } => None,
        }
    }
}

// memlens: value representation and memory layout, demonstrated

use std::io;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use memlens::constants::DEFAULT_LOG_DIRECTIVE;
use memlens::errors::ReportError;
use memlens::report::Report;
use memlens::ui::{self, RenderConfig};

fn init_tracing() -> Result<(), ReportError> {
    // RUST_LOG wins; otherwise only warnings from this crate
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_DIRECTIVE).map_err(|e| {
            ReportError::InvalidLogDirective {
                directive: DEFAULT_LOG_DIRECTIVE.to_string(),
                message: e.to_string(),
            }
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = RenderConfig::detect();
    debug!(?config, "render configuration");

    let report = Report::collect();
    info!(
        sections = report.sections.len(),
        lines = report.line_count(),
        "report collected"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ui::render(&report, &mut out, &config) {
        Ok(()) => Ok(()),
        // reader closed early, e.g. piped into `head`
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed early: {}", e);
            Ok(())
        }
        Err(e) => {
            ui::report_error(&e);
            std::process::exit(1);
        }
    }
}

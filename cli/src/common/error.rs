//! Error handling utilities for the CLI.

use reckon::{RenderConfig, render_error_to};
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] reckon::Error),

    #[error("{source_name}: {error}")]
    Input {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("invalid scan range: {0}")]
    InvalidRange(String),
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    render(&error, no_color);
    std::process::exit(1);
}

/// Render an error to stderr. Calculator errors go through the ariadne
/// renderer, everything else is a plain line.
pub fn render(error: &CliError, no_color: bool) {
    match error {
        CliError::Calc(e) => {
            let config = RenderConfig {
                color: !no_color,
                ..Default::default()
            };
            render_error_to(e, &mut std::io::stderr(), &config).ok();
        }
        other => eprintln!("error: {other}"),
    }
}

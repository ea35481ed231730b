//! Command-line input utilities.

use std::io::Read;

use super::error::{CliError, CliResult};

/// Returns `arg` itself, or all of stdin when `arg` is "-".
pub fn read_input(arg: &str) -> CliResult<String> {
    if !is_stdin(arg) {
        return Ok(arg.to_string());
    }
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|error| CliError::Input {
            source_name: "<stdin>".to_string(),
            error,
        })?;
    Ok(content)
}

/// Check if the argument asks for stdin.
pub fn is_stdin(arg: &str) -> bool {
    arg == "-"
}

//! Builds a calculator from the command-line scan range.

use reckon::solver::SolverOptions;
use reckon::{Calculator, CalculatorOptions};

use super::error::{CliError, CliResult};
use crate::cli::RangeArgs;

/// Validates `range` and returns a calculator that scans it.
pub fn build_calculator(range: &RangeArgs) -> CliResult<Calculator> {
    let RangeArgs { min, max, step } = *range;
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(CliError::InvalidRange(format!(
            "--min ({min}) must be less than --max ({max})"
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(CliError::InvalidRange(format!(
            "--step ({step}) must be positive"
        )));
    }
    // The library would silently scan nothing; say why instead.
    if (max - min) / step > SolverOptions::DEFAULT.max_steps as f64 {
        return Err(CliError::InvalidRange(format!(
            "--step ({step}) is too small for [{min}, {max}]"
        )));
    }

    tracing::debug!(min, max, step, "scan range");
    Ok(Calculator::new(CalculatorOptions {
        solver: SolverOptions {
            min,
            max,
            step,
            ..SolverOptions::default()
        },
        ..CalculatorOptions::default()
    }))
}

//! The `eval` command - evaluate an expression.

use reckon::Calculator;

use crate::cli::EvalArgs;
use crate::common::{CliResult, input::read_input};

/// Run the eval command.
pub fn run(args: EvalArgs) -> CliResult<()> {
    let text = read_input(&args.expression)?;
    let value = Calculator::default().evaluate(&text)?;
    println!("{value}");
    Ok(())
}

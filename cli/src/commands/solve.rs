//! The `solve` command - solve an equation, or evaluate an expression.

use crate::cli::SolveArgs;
use crate::common::{CliResult, calculator::build_calculator, input::read_input};

/// Run the solve command.
pub fn run(args: SolveArgs) -> CliResult<()> {
    let calculator = build_calculator(&args.range)?;
    let text = read_input(&args.equation)?;
    let answer = calculator.solve(&text)?;
    println!("{answer}");
    Ok(())
}

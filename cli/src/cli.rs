//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Reckon - a safe calculator and equation solver
#[derive(Parser, Debug)]
#[command(name = "reckon", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an arithmetic expression
    Eval(EvalArgs),

    /// Solve an equation in `x` (plain expressions are evaluated)
    Solve(SolveArgs),

    /// Start interactive REPL
    Repl(ReplArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate, or `-` to read it from stdin
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for the `solve` command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Equation to solve, or `-` to read it from stdin
    #[arg(allow_hyphen_values = true)]
    pub equation: String,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Arguments for the `repl` command.
#[derive(Args, Debug)]
pub struct ReplArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Interval scanned when an equation has no closed-form solution.
#[derive(Args, Debug, Clone, Copy)]
pub struct RangeArgs {
    /// Lower end of the numeric scan
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Upper end of the numeric scan
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Distance between sample points of the numeric scan
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,
}

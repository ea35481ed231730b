//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod completions;
pub mod eval;
pub mod repl;
pub mod solve;

//! Reckon core: a sandboxed calculator and single-variable equation solver.
//!
//! Untrusted, loosely formatted text such as `2×(3+4)`, `sin(pi/2)+sqrt(16)` or
//! `x^2-5x+6=0` goes through a fixed pipeline:
//!
//! 1. [`normalize`] rewrites it into canonical arithmetic syntax.
//! 2. [`parser::parse`] builds an arena-allocated expression tree under a
//!    closed grammar.
//! 3. [`evaluator::Evaluator`] walks the tree against a whitelist of
//!    operators, constants and functions.
//! 4. For equations, [`solver::solve_equation`] first tries an exact quadratic
//!    reduction ([`polynomial::reduce`]) and falls back to a bounded
//!    bracket-and-bisect scan.
//! 5. [`format_number`] renders the answer.
//!
//! Every call is self-contained: trees, coefficient triples and root lists are
//! allocated per call and nothing is shared between calls.
//!
//! # Example
//!
//! ```
//! assert_eq!(reckon_core::evaluate_expression("2(3+4)").unwrap(), "14");
//! assert_eq!(reckon_core::solve("x^2-5x+6=0").unwrap(), "x1 = 2\nx2 = 3");
//! ```

pub mod api;
pub mod evaluator;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod polynomial;
pub mod solver;

pub use api::{
    Calculator, CalculatorOptions, Error, ErrorKind, evaluate_expression, is_equation, solve,
};
pub use format::format_number;
pub use normalize::normalize;

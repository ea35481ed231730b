//! Public API for Reckon.
//!
//! Two entry points cover the common case and use default limits:
//!
//! - [`evaluate_expression`] computes an arithmetic expression.
//! - [`solve`] solves an equation in `x`, or evaluates the text if it is
//!   not an equation.
//!
//! Both return the answer already formatted for display. A [`Calculator`]
//! does the same with custom [`CalculatorOptions`], and can also return
//! raw values and structured solutions.
//!
//! # Example
//!
//! ```
//! use reckon_core::{ErrorKind, evaluate_expression, solve};
//!
//! assert_eq!(evaluate_expression("2×(3+4)").unwrap(), "14");
//! assert_eq!(solve("x^2-5x+6=0").unwrap(), "x1 = 2\nx2 = 3");
//!
//! let err = evaluate_expression("__import__").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
//! ```

pub mod calculator;
pub mod error;
pub mod options;

pub use calculator::{Calculator, is_equation};
pub use error::{Error, ErrorKind};
pub use options::{CalculatorOptions, DEFAULT_MAX_INPUT_LEN};

use static_assertions::assert_impl_all;

assert_impl_all!(Calculator: Send, Sync);
assert_impl_all!(Error: Send, Sync);
assert_impl_all!(crate::solver::Solution: Send, Sync);

/// Evaluates an arithmetic expression with default limits.
pub fn evaluate_expression(text: &str) -> Result<String, Error> {
    Calculator::default().evaluate(text)
}

/// Solves an equation in `x` with default limits, or evaluates `text` when
/// it has no top-level `=`.
pub fn solve(text: &str) -> Result<String, Error> {
    Calculator::default().solve(text)
}

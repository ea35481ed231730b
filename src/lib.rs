//! Reckon - a safe calculator and equation solver
//!
//! # Overview
//!
//! Reckon takes loosely typed arithmetic, the kind people paste into a chat
//! box, and either computes it or solves it for `x`:
//!
//! - `2×(3+4)`, `6:4`, `посчитай 2^10` are normalized into a small, closed
//!   expression language and evaluated.
//! - `x^2-5x+6=0` is reduced to a quadratic and solved exactly. Anything
//!   that doesn't reduce is scanned numerically over a bounded range.
//!
//! Nothing in the input can reach the host: only a fixed set of math
//! functions and the constants `pi` and `e` are in scope, and nesting,
//! exponents and magnitudes are all bounded.
//!
//! # Quick Start
//!
//! ```
//! use reckon::{evaluate_expression, solve};
//!
//! assert_eq!(evaluate_expression("2(3+4)").unwrap(), "14");
//! assert_eq!(solve("x^2-5x+6=0").unwrap(), "x1 = 2\nx2 = 3");
//! assert_eq!(solve("0 = 1").unwrap(), "no solution");
//! ```
//!
//! # Custom limits
//!
//! ```
//! use reckon::{Calculator, CalculatorOptions, ErrorKind};
//! use reckon::solver::SolverOptions;
//!
//! let calculator = Calculator::new(CalculatorOptions {
//!     solver: SolverOptions { min: 0.0, max: 10.0, ..SolverOptions::default() },
//!     ..CalculatorOptions::default()
//! });
//!
//! assert_eq!(calculator.solve("sqrt(x) = 3").unwrap(), "x = 9");
//! let err = calculator.solve("sqrt(x) = 4").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NoSolutionFound);
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from reckon_core
pub use reckon_core::api::{
    Calculator, CalculatorOptions, DEFAULT_MAX_INPUT_LEN, Error, ErrorKind, evaluate_expression,
    is_equation, solve,
};
pub use reckon_core::{evaluator, parser, polynomial, solver};
pub use reckon_core::{format_number, normalize};

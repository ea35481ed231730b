//! Single-variable equation solving.
//!
//! An equation is first reduced symbolically; if both sides together form a
//! polynomial of degree at most two it is solved in closed form. Anything
//! else goes to a bounded bracket-and-bisect scan, which can miss roots that
//! are closer together than the step or lie outside the scanned range.

mod numeric;
mod roots;

pub use roots::RootSet;

use bumpalo::Bump;
use core::fmt;

use crate::api::Error;
use crate::evaluator::EvaluatorOptions;
use crate::format_number;
use crate::parser::{BinaryOp, Expr, parse};
use crate::polynomial::{Quadratic, reduce_with_max_depth};

/// Tunables for both solving paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Lower end of the numeric scan.
    pub min: f64,
    /// Upper end of the numeric scan.
    pub max: f64,
    pub step: f64,
    /// The scan gives up without sampling when `[min, max)` needs more
    /// steps than this.
    pub max_steps: usize,
    pub max_bisections: usize,
    /// A sampled value below this magnitude is a root.
    pub zero_tolerance: f64,
    /// Bisection stops once the midpoint value is below this magnitude.
    pub bisection_tolerance: f64,
    /// Roots closer than this are merged.
    pub merge_tolerance: f64,
    /// Coefficients and discriminants below this magnitude count as zero in
    /// the closed-form path.
    pub exact_tolerance: f64,
    /// How many roots the rendered solution lists.
    pub max_shown_roots: usize,
    pub max_reduce_depth: usize,
}

impl SolverOptions {
    pub const DEFAULT: Self = SolverOptions {
        min: -100.0,
        max: 100.0,
        step: 1.0,
        max_steps: 1_000_000,
        max_bisections: 70,
        zero_tolerance: 1e-6,
        bisection_tolerance: 1e-8,
        merge_tolerance: 1e-5,
        exact_tolerance: 1e-12,
        max_shown_roots: 6,
        max_reduce_depth: crate::polynomial::DEFAULT_MAX_REDUCE_DEPTH,
    };
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which path produced a set of roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Exact,
    Numeric,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Roots {
        roots: RootSet,
        method: Method,
        /// How many roots `Display` lists before noting the rest.
        max_shown: usize,
    },
    /// The equation reduces to a false constant statement such as `0 = 1`.
    NoSolution,
    /// The equation reduces to `0 = 0`.
    InfinitelyMany,
    /// A quadratic with a negative discriminant.
    NoRealSolution,
}

impl Solution {
    pub fn roots(&self) -> Option<&RootSet> {
        match self {
            Solution::Roots { roots, .. } => Some(roots),
            _ => None,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Solution::Roots { method, .. } => *method,
            _ => Method::Exact,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (roots, max_shown) = match self {
            Solution::NoSolution => return f.write_str("no solution"),
            Solution::InfinitelyMany => return f.write_str("infinitely many solutions"),
            Solution::NoRealSolution => return f.write_str("no real solution"),
            Solution::Roots {
                roots, max_shown, ..
            } => (roots, *max_shown),
        };
        if let [root] = roots.as_slice() {
            return write!(f, "x = {}", format_number(*root));
        }
        for (i, root) in roots.iter().take(max_shown).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "x{} = {}", i + 1, format_number(root))?;
        }
        if roots.len() > max_shown {
            write!(f, "\n... more roots found, showing the first {max_shown}")?;
        }
        Ok(())
    }
}

/// Solves canonical equation text containing exactly one `=`.
///
/// ```
/// use reckon_core::evaluator::EvaluatorOptions;
/// use reckon_core::solver::{Method, SolverOptions, solve_equation};
///
/// let solution = solve_equation(
///     "x**2-5*x+6=0",
///     &EvaluatorOptions::default(),
///     &SolverOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(solution.method(), Method::Exact);
/// assert_eq!(solution.to_string(), "x1 = 2\nx2 = 3");
/// ```
pub fn solve_equation(
    text: &str,
    limits: &EvaluatorOptions,
    options: &SolverOptions,
) -> Result<Solution, Error> {
    let (lhs_text, rhs_text) = split_equation(text)?;

    let arena = Bump::new();
    let lhs = parse_side(&arena, text, lhs_text)?;
    let rhs = parse_side(&arena, text, rhs_text)?;
    let difference = arena.alloc(Expr::Binary {
        op: BinaryOp::Sub,
        left: lhs,
        right: rhs,
    });

    if let Some(quadratic) = reduce_with_max_depth(difference, options.max_reduce_depth) {
        tracing::debug!(?quadratic, "solving in closed form");
        return Ok(solve_quadratic(quadratic, options));
    }

    tracing::debug!(min = options.min, max = options.max, "falling back to numeric scan");
    let roots = numeric::scan(lhs, rhs, limits, options);
    if roots.is_empty() {
        return Err(Error::NoSolutionFound {
            min: options.min,
            max: options.max,
        });
    }
    Ok(Solution::Roots {
        roots,
        method: Method::Numeric,
        max_shown: options.max_shown_roots,
    })
}

fn split_equation(text: &str) -> Result<(&str, &str), Error> {
    let mut sides = text.split('=');
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(Error::MalformedEquation("use exactly one `=`"));
    };
    let (lhs, rhs) = (lhs.trim(), rhs.trim());
    if lhs.is_empty() || rhs.is_empty() {
        return Err(Error::MalformedEquation("both sides of `=` must be non-empty"));
    }
    Ok((lhs, rhs))
}

// Parses one side of `text`, reporting syntax errors against the whole
// equation.
fn parse_side<'a>(arena: &'a Bump, text: &str, side: &str) -> Result<&'a Expr<'a>, Error> {
    parse(arena, side).map_err(|e| {
        let offset = side.as_ptr() as usize - text.as_ptr() as usize;
        Error::Syntax(e.within(offset, text))
    })
}

fn solve_quadratic(q: Quadratic, options: &SolverOptions) -> Solution {
    let eps = options.exact_tolerance;
    // Closed-form roots are exact: only identical values are merged, however
    // close two distinct roots are.
    let roots = |values: &[f64]| Solution::Roots {
        roots: RootSet::from_values(values.iter().copied(), 0.0),
        method: Method::Exact,
        max_shown: options.max_shown_roots,
    };

    if q.c2.abs() < eps {
        if q.c1.abs() < eps {
            return if q.c0.abs() < eps {
                Solution::InfinitelyMany
            } else {
                Solution::NoSolution
            };
        }
        return roots(&[-q.c0 / q.c1]);
    }

    let d = q.c1 * q.c1 - 4.0 * q.c2 * q.c0;
    if d < -eps {
        return Solution::NoRealSolution;
    }
    if d.abs() <= eps {
        return roots(&[-q.c1 / (2.0 * q.c2)]);
    }
    let sqrt_d = d.sqrt();
    roots(&[
        (-q.c1 - sqrt_d) / (2.0 * q.c2),
        (-q.c1 + sqrt_d) / (2.0 * q.c2),
    ])
}

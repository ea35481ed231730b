use crate::evaluator::{Evaluator, EvaluatorOptions};
use crate::parser::Expr;

use super::{RootSet, SolverOptions};

/// Scans `[min, max)` in fixed steps for zeros of `lhs - rhs`.
///
/// Sample points where either side fails to evaluate are skipped. A sample
/// that is already close to zero is recorded as is; a sign change between
/// two samples is narrowed down by bisection.
pub(super) fn scan(
    lhs: &Expr<'_>,
    rhs: &Expr<'_>,
    limits: &EvaluatorOptions,
    options: &SolverOptions,
) -> RootSet {
    if !(options.step > 0.0 && options.min < options.max) {
        return RootSet::default();
    }

    let residual = |x: f64| -> Option<f64> {
        let evaluator = Evaluator::new(limits).with_variable(x);
        let left = evaluator.eval(lhs).ok()?;
        let right = evaluator.eval(rhs).ok()?;
        evaluator.ensure_finite(left - right).ok()
    };

    let steps = ((options.max - options.min) / options.step).ceil();
    if !(steps <= options.max_steps as f64) {
        tracing::debug!(steps, max_steps = options.max_steps, "scan range too fine");
        return RootSet::default();
    }

    let mut found = Vec::new();
    for i in 0..steps as usize {
        let x = options.min + i as f64 * options.step;
        let x_next = x + options.step;
        let (Some(y), Some(y_next)) = (residual(x), residual(x_next)) else {
            continue;
        };

        if y.abs() < options.zero_tolerance {
            found.push(x);
        }
        if y_next.abs() < options.zero_tolerance {
            found.push(x_next);
        }
        if y * y_next < 0.0 {
            match bisect(&residual, x, x_next, y, options) {
                Some(root) => found.push(root),
                None => tracing::debug!(x, x_next, "bisection abandoned"),
            }
        }
    }

    let roots = RootSet::from_values(found, options.merge_tolerance);
    tracing::debug!(count = roots.len(), "numeric scan finished");
    roots
}

// Assumes `f(left)` and `f(right)` have opposite signs. Gives up on the
// bracket if `f` fails at a midpoint.
fn bisect(
    f: &impl Fn(f64) -> Option<f64>,
    mut left: f64,
    mut right: f64,
    mut y_left: f64,
    options: &SolverOptions,
) -> Option<f64> {
    for _ in 0..options.max_bisections {
        let mid = (left + right) / 2.0;
        let y_mid = f(mid)?;
        if y_mid.abs() < options.bisection_tolerance {
            return Some(mid);
        }
        if y_left * y_mid <= 0.0 {
            right = mid;
        } else {
            left = mid;
            y_left = y_mid;
        }
    }
    Some((left + right) / 2.0)
}

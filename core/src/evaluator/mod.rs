//! Sandboxed evaluation of expression trees.
//!
//! The evaluator only knows the operators of [`BinaryOp`] and [`UnaryOp`],
//! the constants `pi` and `e`, the builtins listed in [`functions::BUILTINS`]
//! and, when one is bound, the equation variable `x`. Every other name is an
//! error. Every intermediate result is checked to be finite and within
//! [`EvaluatorOptions::max_magnitude`].

mod arithmetic;
mod error;
pub mod functions;

pub use error::{Arity, EvalError};

use smallvec::SmallVec;

use crate::parser::{Argument, BinaryOp, Expr, UnaryOp};

/// Name of the single equation variable.
pub const VARIABLE: &str = "x";

/// Limits applied while evaluating.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorOptions {
    /// Deepest node the evaluator will visit; the root is at depth 1.
    pub max_depth: usize,
    /// Largest magnitude any intermediate result may have.
    pub max_magnitude: f64,
    /// Largest magnitude an exponent of `**` may have.
    pub max_exponent: f64,
}

impl EvaluatorOptions {
    pub const DEFAULT: Self = EvaluatorOptions {
        max_depth: 40,
        max_magnitude: 1e15,
        max_exponent: 12.0,
    };
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Walks an expression tree and computes its value.
///
/// ```
/// use bumpalo::Bump;
/// use reckon_core::evaluator::{Evaluator, EvaluatorOptions};
/// use reckon_core::parser::parse;
///
/// let arena = Bump::new();
/// let expr = parse(&arena, "x**2 + 1").unwrap();
/// let options = EvaluatorOptions::default();
/// let value = Evaluator::new(&options).with_variable(3.0).eval(expr).unwrap();
/// assert_eq!(value, 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'o> {
    options: &'o EvaluatorOptions,
    variable: Option<f64>,
}

impl<'o> Evaluator<'o> {
    /// An evaluator with `x` unbound.
    pub fn new(options: &'o EvaluatorOptions) -> Self {
        Evaluator {
            options,
            variable: None,
        }
    }

    /// Binds `x` to `value`.
    pub fn with_variable(self, value: f64) -> Self {
        Evaluator {
            variable: Some(value),
            ..self
        }
    }

    pub fn eval(&self, expr: &Expr<'_>) -> Result<f64, EvalError> {
        self.eval_node(expr, 1)
    }

    /// Checks that `value` is finite and within the magnitude bound.
    pub fn ensure_finite(&self, value: f64) -> Result<f64, EvalError> {
        if value.is_nan() {
            return Err(EvalError::domain("result", "not a number"));
        }
        if value.is_infinite() {
            return Err(EvalError::Overflow("result is infinite".to_string()));
        }
        if value.abs() > self.options.max_magnitude {
            return Err(EvalError::Overflow(format!(
                "result exceeds {:e} in magnitude",
                self.options.max_magnitude
            )));
        }
        Ok(value)
    }

    fn eval_node(&self, expr: &Expr<'_>, depth: usize) -> Result<f64, EvalError> {
        if depth > self.options.max_depth {
            return Err(EvalError::TooDeep {
                limit: self.options.max_depth,
            });
        }
        match *expr {
            Expr::Number(value) => Ok(value),
            Expr::Ident(name) => self.resolve(name),
            Expr::Unary { op, operand } => {
                let value = self.eval_node(operand, depth + 1)?;
                match op {
                    UnaryOp::Pos => self.ensure_finite(value),
                    UnaryOp::Neg => self.ensure_finite(-value),
                    UnaryOp::Invert => Err(EvalError::UnsupportedExpression(op.symbol())),
                }
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval_node(left, depth + 1)?;
                let right = self.eval_node(right, depth + 1)?;
                let value = match op {
                    BinaryOp::Add => left + right,
                    BinaryOp::Sub => left - right,
                    BinaryOp::Mul => left * right,
                    BinaryOp::Div => arithmetic::div(left, right)?,
                    BinaryOp::FloorDiv => arithmetic::floor_div(left, right)?,
                    BinaryOp::Rem => arithmetic::rem(left, right)?,
                    BinaryOp::Pow => arithmetic::pow(left, right, self.options.max_exponent)?,
                    BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::Shl | BinaryOp::Shr => {
                        return Err(EvalError::UnsupportedExpression(op.symbol()));
                    }
                };
                self.ensure_finite(value)
            }
            Expr::Call { name, args } => self.call(name, args, depth),
        }
    }

    fn resolve(&self, name: &str) -> Result<f64, EvalError> {
        if let Some(value) = functions::constant(name) {
            return Ok(value);
        }
        if name == VARIABLE {
            return self
                .variable
                .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()));
        }
        Err(EvalError::UnknownIdentifier(name.to_string()))
    }

    fn call(&self, name: &str, args: &[Argument<'_>], depth: usize) -> Result<f64, EvalError> {
        let Some(builtin) = functions::lookup(name) else {
            return Err(EvalError::UnsupportedCall(name.to_string()));
        };
        // Keyword arguments don't count towards arity; they are rejected
        // only once the positional count is right.
        let positional = args
            .iter()
            .filter(|arg| matches!(arg, Argument::Positional(_)))
            .count();
        if !builtin.arity.accepts(positional) {
            return Err(EvalError::ArityMismatch {
                function: builtin.name,
                expected: builtin.arity,
                found: positional,
            });
        }
        if args
            .iter()
            .any(|arg| matches!(arg, Argument::Keyword { .. }))
        {
            return Err(EvalError::KeywordArgsNotSupported {
                function: builtin.name,
            });
        }
        let values = args
            .iter()
            .map(|arg| self.eval_node(arg.value(), depth + 1))
            .collect::<Result<SmallVec<[f64; 2]>, _>>()?;
        let value = (builtin.apply)(&values)?;
        self.ensure_finite(value)
    }
}

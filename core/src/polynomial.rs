//! Symbolic reduction of expressions to polynomials of degree at most two in `x`.
//!
//! Reduction is partial: anything that is not built from numbers, `pi`, `e`,
//! `x`, `+`, `-`, `*` and small integer powers yields `None`, and so does any
//! product whose degree would exceed two. The solver then falls back to a
//! numeric scan.

use core::f64::consts;
use core::ops::{Add, Neg, Sub};

use crate::evaluator::VARIABLE;
use crate::parser::{BinaryOp, Expr, UnaryOp};

/// Magnitude below which a cubic or quartic coefficient, or the fractional
/// part of an exponent, counts as zero.
const NEGLIGIBLE: f64 = 1e-10;

/// Default depth past which reduction gives up; the root is at depth 0.
pub const DEFAULT_MAX_REDUCE_DEPTH: usize = 25;

/// The polynomial `c0 + c1·x + c2·x²`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadratic {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Quadratic {
    pub const ZERO: Quadratic = Quadratic::constant(0.0);
    pub const ONE: Quadratic = Quadratic::constant(1.0);
    pub const X: Quadratic = Quadratic {
        c0: 0.0,
        c1: 1.0,
        c2: 0.0,
    };

    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Quadratic { c0, c1, c2 }
    }

    pub const fn constant(value: f64) -> Self {
        Quadratic {
            c0: value,
            c1: 0.0,
            c2: 0.0,
        }
    }

    /// Product of two polynomials, or `None` if it has a non-negligible term
    /// of degree three or four.
    pub fn checked_mul(self, other: Quadratic) -> Option<Quadratic> {
        let cubic = self.c1 * other.c2 + self.c2 * other.c1;
        let quartic = self.c2 * other.c2;
        if cubic.abs() > NEGLIGIBLE || quartic.abs() > NEGLIGIBLE {
            return None;
        }
        Some(Quadratic {
            c0: self.c0 * other.c0,
            c1: self.c0 * other.c1 + self.c1 * other.c0,
            c2: self.c0 * other.c2 + self.c1 * other.c1 + self.c2 * other.c0,
        })
    }

    /// `self` raised to `exponent`, which must be 0, 1 or 2.
    pub fn checked_pow(self, exponent: u32) -> Option<Quadratic> {
        match exponent {
            0 => Some(Quadratic::ONE),
            1 => Some(self),
            2 => self.checked_mul(self),
            _ => None,
        }
    }

    pub fn eval_at(&self, x: f64) -> f64 {
        self.c0 + self.c1 * x + self.c2 * x * x
    }
}

impl Add for Quadratic {
    type Output = Quadratic;

    fn add(self, other: Quadratic) -> Quadratic {
        Quadratic::new(self.c0 + other.c0, self.c1 + other.c1, self.c2 + other.c2)
    }
}

impl Sub for Quadratic {
    type Output = Quadratic;

    fn sub(self, other: Quadratic) -> Quadratic {
        Quadratic::new(self.c0 - other.c0, self.c1 - other.c1, self.c2 - other.c2)
    }
}

impl Neg for Quadratic {
    type Output = Quadratic;

    fn neg(self) -> Quadratic {
        Quadratic::new(-self.c0, -self.c1, -self.c2)
    }
}

/// Reduces `expr` to a quadratic in `x`, or `None` if it is not one.
///
/// ```
/// use bumpalo::Bump;
/// use reckon_core::parser::parse;
/// use reckon_core::polynomial::{Quadratic, reduce};
///
/// let arena = Bump::new();
/// let expr = parse(&arena, "(x-2)*(x-3)").unwrap();
/// assert_eq!(reduce(expr), Some(Quadratic::new(6.0, -5.0, 1.0)));
///
/// let expr = parse(&arena, "x**3").unwrap();
/// assert_eq!(reduce(expr), None);
/// ```
pub fn reduce(expr: &Expr<'_>) -> Option<Quadratic> {
    reduce_with_max_depth(expr, DEFAULT_MAX_REDUCE_DEPTH)
}

pub fn reduce_with_max_depth(expr: &Expr<'_>, max_depth: usize) -> Option<Quadratic> {
    let reduced = reduce_node(expr, 0, max_depth);
    tracing::debug!(?reduced, "polynomial reduction");
    reduced
}

fn reduce_node(expr: &Expr<'_>, depth: usize, max_depth: usize) -> Option<Quadratic> {
    if depth > max_depth {
        return None;
    }
    match *expr {
        Expr::Number(value) => Some(Quadratic::constant(value)),
        Expr::Ident(name) if name == VARIABLE => Some(Quadratic::X),
        Expr::Ident("pi") => Some(Quadratic::constant(consts::PI)),
        Expr::Ident("e") => Some(Quadratic::constant(consts::E)),
        Expr::Ident(_) => None,
        Expr::Unary { op, operand } => {
            let operand = reduce_node(operand, depth + 1, max_depth)?;
            match op {
                UnaryOp::Pos => Some(operand),
                UnaryOp::Neg => Some(-operand),
                UnaryOp::Invert => None,
            }
        }
        Expr::Binary {
            op: BinaryOp::Pow,
            left,
            right,
        } => {
            let base = reduce_node(left, depth + 1, max_depth)?;
            // The exponent has to be written as a literal.
            let Expr::Number(exponent) = *right else {
                return None;
            };
            let rounded = exponent.round();
            if (exponent - rounded).abs() > NEGLIGIBLE
                || !(0.0..=2.0).contains(&rounded)
            {
                return None;
            }
            base.checked_pow(rounded as u32)
        }
        Expr::Binary { op, left, right } => {
            let left = reduce_node(left, depth + 1, max_depth)?;
            let right = reduce_node(right, depth + 1, max_depth)?;
            match op {
                BinaryOp::Add => Some(left + right),
                BinaryOp::Sub => Some(left - right),
                BinaryOp::Mul => left.checked_mul(right),
                _ => None,
            }
        }
        Expr::Call { .. } => None,
    }
}

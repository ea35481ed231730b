//! The whitelist: every name an expression may call or refer to.

use core::f64::consts;

use super::error::{Arity, EvalError};

/// A callable builtin. `apply` is only ever handed a slice whose length
/// `arity` accepts.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: Arity,
    pub apply: fn(&[f64]) -> Result<f64, EvalError>,
}

const ONE: Arity = Arity::exactly(1);
const ONE_OR_TWO: Arity = Arity::between(1, 2);

#[rustfmt::skip]
pub const BUILTINS: &[Builtin] = &[
    Builtin { name: "sin", arity: ONE, apply: sin },
    Builtin { name: "cos", arity: ONE, apply: cos },
    Builtin { name: "tan", arity: ONE, apply: tan },
    Builtin { name: "asin", arity: ONE, apply: asin },
    Builtin { name: "acos", arity: ONE, apply: acos },
    Builtin { name: "atan", arity: ONE, apply: atan },
    Builtin { name: "sqrt", arity: ONE, apply: sqrt },
    Builtin { name: "abs", arity: ONE, apply: abs },
    Builtin { name: "ln", arity: ONE, apply: ln },
    Builtin { name: "log", arity: ONE_OR_TWO, apply: log },
    Builtin { name: "log10", arity: ONE, apply: log10 },
    Builtin { name: "exp", arity: ONE, apply: exp },
    Builtin { name: "round", arity: ONE_OR_TWO, apply: round },
    Builtin { name: "floor", arity: ONE, apply: floor },
    Builtin { name: "ceil", arity: ONE, apply: ceil },
    Builtin { name: "fact", arity: ONE, apply: fact },
];

pub const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// Looks up a callable builtin by its (lowercase) name.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

fn sin(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].sin())
}

fn cos(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].cos())
}

fn tan(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].tan())
}

fn atan(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].atan())
}

fn abs(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].abs())
}

fn exp(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].exp())
}

fn floor(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].floor())
}

fn ceil(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].ceil())
}

fn asin(args: &[f64]) -> Result<f64, EvalError> {
    if args[0].abs() > 1.0 {
        return Err(EvalError::domain("asin", "argument outside [-1, 1]"));
    }
    Ok(args[0].asin())
}

fn acos(args: &[f64]) -> Result<f64, EvalError> {
    if args[0].abs() > 1.0 {
        return Err(EvalError::domain("acos", "argument outside [-1, 1]"));
    }
    Ok(args[0].acos())
}

fn sqrt(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] < 0.0 {
        return Err(EvalError::domain("sqrt", "negative argument"));
    }
    Ok(args[0].sqrt())
}

fn ln(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] <= 0.0 {
        return Err(EvalError::domain("ln", "argument must be positive"));
    }
    Ok(args[0].ln())
}

fn log10(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] <= 0.0 {
        return Err(EvalError::domain("log10", "argument must be positive"));
    }
    Ok(args[0].log10())
}

// `log(x)` is the natural logarithm, `log(x, base)` divides by `ln(base)`.
fn log(args: &[f64]) -> Result<f64, EvalError> {
    let x = args[0];
    if x <= 0.0 {
        return Err(EvalError::domain("log", "argument must be positive"));
    }
    let Some(&base) = args.get(1) else {
        return Ok(x.ln());
    };
    if base <= 0.0 {
        return Err(EvalError::domain("log", "base must be positive"));
    }
    if base == 1.0 {
        return Err(EvalError::domain("log", "base must not be 1"));
    }
    Ok(x.ln() / base.ln())
}

// Half-to-even, optionally to a number of decimal places (negative places
// round to tens, hundreds and so on).
fn round(args: &[f64]) -> Result<f64, EvalError> {
    let x = args[0];
    let Some(&digits) = args.get(1) else {
        return Ok(x.round_ties_even());
    };
    if digits.fract() != 0.0 {
        return Err(EvalError::domain("round", "number of digits must be an integer"));
    }
    // Past ~16 significant digits there is nothing left to round.
    if digits > 22.0 || !x.is_finite() {
        return Ok(x);
    }
    if digits < -22.0 {
        return Ok(0.0_f64.copysign(x));
    }
    let scale = 10f64.powi(digits.abs() as i32);
    if digits >= 0.0 {
        let rounded = (x * scale).round_ties_even() / scale;
        Ok(if rounded.is_finite() { rounded } else { x })
    } else {
        Ok((x / scale).round_ties_even() * scale)
    }
}

/// Largest argument `fact` accepts.
const FACT_MAX: f64 = 100.0;

fn fact(args: &[f64]) -> Result<f64, EvalError> {
    let x = args[0];
    let n = x.round();
    if (x - n).abs() > 1e-10 {
        return Err(EvalError::domain("fact", "argument must be an integer"));
    }
    if !(0.0..=FACT_MAX).contains(&n) {
        return Err(EvalError::domain("fact", "argument must be between 0 and 100"));
    }
    Ok((2..=n as u32).map(f64::from).product())
}

//! Binary operators with floor-division and modulo semantics that round
//! toward negative infinity.

use super::error::EvalError;

pub(super) fn div(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::domain("/", "division by zero"));
    }
    Ok(a / b)
}

pub(super) fn floor_div(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::domain("//", "division by zero"));
    }
    let rem = a % b;
    let mut quotient = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return Ok(0.0_f64.copysign(a / b));
    }
    // `a - rem` is an exact multiple of `b` up to rounding; snap to it.
    let floored = quotient.floor();
    Ok(if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    })
}

pub(super) fn rem(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::domain("%", "modulo by zero"));
    }
    let rem = a % b;
    if rem == 0.0 {
        return Ok(0.0_f64.copysign(b));
    }
    Ok(if (b < 0.0) != (rem < 0.0) { rem + b } else { rem })
}

pub(super) fn pow(base: f64, exponent: f64, max_exponent: f64) -> Result<f64, EvalError> {
    if exponent.abs() > max_exponent {
        return Err(EvalError::Overflow(format!(
            "exponent {exponent} exceeds the limit of {max_exponent}"
        )));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::domain("**", "zero cannot be raised to a negative power"));
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::domain(
            "**",
            "negative base with a fractional exponent",
        ));
    }
    Ok(base.powf(exponent))
}

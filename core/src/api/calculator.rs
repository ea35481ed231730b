use bumpalo::Bump;

use super::{CalculatorOptions, Error};
use crate::evaluator::Evaluator;
use crate::format::format_number;
use crate::normalize::normalize;
use crate::parser::{ParseError, parse};
use crate::solver::{self, Solution};

/// Entry point for evaluating expressions and solving equations with a given
/// set of limits.
///
/// A `Calculator` holds only its options. Every call allocates its own
/// arena and frees it on return, so one instance can serve any number of
/// threads.
///
/// ```
/// use reckon_core::{Calculator, CalculatorOptions};
///
/// let calculator = Calculator::new(CalculatorOptions::default());
/// assert_eq!(calculator.evaluate("sin(pi/2)+sqrt(16)").unwrap(), "5");
/// assert_eq!(calculator.solve("2x+3=7").unwrap(), "x = 2");
/// assert_eq!(calculator.solve("2+2").unwrap(), "4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: CalculatorOptions,
}

impl Calculator {
    pub fn new(options: CalculatorOptions) -> Self {
        Calculator { options }
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Checks the length of `text`, normalizes it and checks again.
    pub fn canonicalize(&self, text: &str) -> Result<String, Error> {
        self.check_length(text)?;
        let canonical = normalize(text);
        if canonical.is_empty() {
            return Err(ParseError::empty(&canonical).into());
        }
        self.check_length(&canonical)?;
        Ok(canonical)
    }

    /// Evaluates an expression that must not contain `x`.
    pub fn evaluate_value(&self, text: &str) -> Result<f64, Error> {
        let canonical = self.canonicalize(text)?;
        self.eval_canonical(&canonical)
    }

    /// Evaluates an expression and formats the result.
    pub fn evaluate(&self, text: &str) -> Result<String, Error> {
        self.evaluate_value(text).map(format_number)
    }

    /// Solves an equation in `x`, returning the structured outcome.
    pub fn solve_equation(&self, text: &str) -> Result<Solution, Error> {
        let canonical = self.canonicalize(text)?;
        solver::solve_equation(&canonical, &self.options.evaluator, &self.options.solver)
    }

    /// Solves `text` if it is an equation, evaluates it otherwise.
    pub fn solve(&self, text: &str) -> Result<String, Error> {
        let canonical = self.canonicalize(text)?;
        if is_equation(&canonical) {
            tracing::debug!("dispatching as an equation");
            let solution =
                solver::solve_equation(&canonical, &self.options.evaluator, &self.options.solver)?;
            return Ok(solution.to_string());
        }
        self.eval_canonical(&canonical).map(format_number)
    }

    fn eval_canonical(&self, canonical: &str) -> Result<f64, Error> {
        let arena = Bump::new();
        let expr = parse(&arena, canonical)?;
        Ok(Evaluator::new(&self.options.evaluator).eval(expr)?)
    }

    fn check_length(&self, text: &str) -> Result<(), Error> {
        let length = text.chars().count();
        if length > self.options.max_input_len {
            return Err(Error::LengthExceeded {
                length,
                limit: self.options.max_input_len,
            });
        }
        Ok(())
    }
}

/// Whether canonical `text` has an `=` outside any parentheses.
///
/// ```
/// use reckon_core::is_equation;
///
/// assert!(is_equation("2*x=4"));
/// assert!(!is_equation("round(2.5, ndigits=1)"));
/// ```
pub fn is_equation(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

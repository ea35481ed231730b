use core::fmt;
use thiserror::Error;

/// Why evaluating a tree failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),

    /// The equation variable appeared outside an equation.
    #[error("variable `{0}` can only be used in an equation")]
    UndefinedVariable(String),

    #[error("function `{0}` is not supported")]
    UnsupportedCall(String),

    #[error("`{function}` takes {expected} argument(s) but {found} were given")]
    ArityMismatch {
        function: &'static str,
        expected: Arity,
        found: usize,
    },

    #[error("`{function}` does not accept keyword arguments")]
    KeywordArgsNotSupported { function: &'static str },

    #[error("math domain error in `{context}`: {reason}")]
    DomainError {
        context: &'static str,
        reason: &'static str,
    },

    #[error("overflow: {0}")]
    Overflow(String),

    #[error("expression is nested more than {limit} levels deep")]
    TooDeep { limit: usize },

    #[error("operator `{0}` is not supported")]
    UnsupportedExpression(&'static str),
}

impl EvalError {
    pub(crate) fn domain(context: &'static str, reason: &'static str) -> Self {
        EvalError::DomainError { context, reason }
    }
}

/// Accepted positional argument counts for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn exactly(n: usize) -> Self {
        Arity { min: n, max: n }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Arity { min, max }
    }

    pub fn accepts(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}

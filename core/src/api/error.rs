//! Public error types for the Reckon API.
//!
//! Errors from the parser and evaluator are wrapped at the API boundary.
//! Callers that only need to pick a message should match on
//! [`Error::kind`], which flattens the nesting into one tag.

use core::fmt;
use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::ParseError;

/// Public error type for all Reckon operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input is longer than the configured ceiling, counted in chars.
    #[error("input is {length} characters long; the limit is {limit}")]
    LengthExceeded { length: usize, limit: usize },

    /// The canonical text is not a well-formed expression.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("malformed equation: {0}")]
    MalformedEquation(&'static str),

    /// The numeric scan found no root in the scanned range.
    #[error("could not find a solution in [{min}, {max}]")]
    NoSolutionFound { min: f64, max: f64 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LengthExceeded { .. } => ErrorKind::LengthExceeded,
            Error::Syntax(_) => ErrorKind::SyntaxError,
            Error::MalformedEquation(_) => ErrorKind::MalformedEquation,
            Error::NoSolutionFound { .. } => ErrorKind::NoSolutionFound,
            Error::Eval(e) => match e {
                EvalError::UnknownIdentifier(_) => ErrorKind::UnknownIdentifier,
                EvalError::UndefinedVariable(_) => ErrorKind::UndefinedVariable,
                EvalError::UnsupportedCall(_) => ErrorKind::UnsupportedCall,
                EvalError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
                EvalError::KeywordArgsNotSupported { .. } => ErrorKind::KeywordArgsNotSupported,
                EvalError::DomainError { .. } => ErrorKind::DomainError,
                EvalError::Overflow(_) => ErrorKind::Overflow,
                EvalError::TooDeep { .. } => ErrorKind::TooDeep,
                EvalError::UnsupportedExpression(_) => ErrorKind::UnsupportedExpression,
            },
        }
    }

    /// The parse error behind a [`ErrorKind::SyntaxError`], if that is what
    /// this is.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

/// Flat tag for every way a call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LengthExceeded,
    SyntaxError,
    UnknownIdentifier,
    UndefinedVariable,
    UnsupportedCall,
    ArityMismatch,
    KeywordArgsNotSupported,
    DomainError,
    Overflow,
    TooDeep,
    UnsupportedExpression,
    MalformedEquation,
    NoSolutionFound,
}

impl ErrorKind {
    /// Short stable code, used as the diagnostic code when rendering.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::LengthExceeded => "E001",
            ErrorKind::SyntaxError => "E002",
            ErrorKind::UnknownIdentifier => "E003",
            ErrorKind::UndefinedVariable => "E004",
            ErrorKind::UnsupportedCall => "E005",
            ErrorKind::ArityMismatch => "E006",
            ErrorKind::KeywordArgsNotSupported => "E007",
            ErrorKind::DomainError => "E008",
            ErrorKind::Overflow => "E009",
            ErrorKind::TooDeep => "E010",
            ErrorKind::UnsupportedExpression => "E011",
            ErrorKind::MalformedEquation => "E012",
            ErrorKind::NoSolutionFound => "E013",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

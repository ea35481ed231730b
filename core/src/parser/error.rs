use pest::error::{ErrorVariant, InputLocation};
use thiserror::Error;

use super::parser::Rule;
use super::syntax::Span;

/// A syntax error in canonical expression text.
///
/// `input` is the text the span points into, so the error can be rendered
/// without the caller keeping the source around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub input: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span, input: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            span,
            input: input.into(),
        }
    }

    /// Error for input that is empty or whitespace only.
    pub fn empty(input: &str) -> Self {
        ParseError::new("empty expression", Span::new(0, input.len()), input)
    }

    /// Re-anchors an error produced for a slice of `whole` so that its span
    /// and input refer to `whole` instead.
    pub fn within(self, offset: usize, whole: &str) -> Self {
        ParseError {
            message: self.message,
            span: self.span.shifted(offset),
            input: whole.to_string(),
        }
    }
}

pub(crate) fn convert_pest_error(error: pest::error::Error<Rule>, source: &str) -> ParseError {
    let span = match error.location {
        InputLocation::Pos(pos) => Span::new(pos, pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };
    let message = match &error.variant {
        ErrorVariant::CustomError { message } => message.clone(),
        ErrorVariant::ParsingError { .. } => match source
            .get(span.start()..)
            .and_then(|rest| rest.chars().next())
        {
            Some(c) => format!("unexpected `{c}`"),
            None => "unexpected end of input".to_string(),
        },
    };
    ParseError::new(message, span, source)
}

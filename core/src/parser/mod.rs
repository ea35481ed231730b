mod error;
mod expr;
#[allow(clippy::module_inception)]
mod parser;
mod syntax;

pub use error::ParseError;
pub use expr::{Argument, BinaryOp, Expr, UnaryOp};
pub use parser::{DEFAULT_MAX_PARSE_DEPTH, ExpressionParser, Rule, parse, parse_with_max_depth};
pub use syntax::Span;

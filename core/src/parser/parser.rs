use bumpalo::Bump;
use core::cell::Cell;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::parser::error::{ParseError, convert_pest_error};
use crate::parser::{Argument, BinaryOp, Expr, UnaryOp};

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        // Bitwise operators. Parsed only to be rejected by the evaluator.
        .op(Op::infix(Rule::bit_or, Assoc::Left))        // `|`
        .op(Op::infix(Rule::bit_and, Assoc::Left))       // `&`
        .op(
            Op::infix(Rule::shl, Assoc::Left) |
            Op::infix(Rule::shr, Assoc::Left)
        )                                                // `<<`, `>>`

        // Arithmetic operators.
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                                // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::floor_div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left)
        )                                                // `*`, `/`, `//`, `%`
        .op(
            Op::prefix(Rule::neg) |
            Op::prefix(Rule::pos) |
            Op::prefix(Rule::invert)
        )                                                // `-`, `+`, `~`
        .op(Op::infix(Rule::pow, Assoc::Right))          // `**` (right-assoc)
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

type PestResult<T> = Result<T, pest::error::Error<Rule>>;

fn custom_error(message: impl Into<String>, span: pest::Span<'_>) -> pest::error::Error<Rule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: message.into(),
        },
        span,
    )
}

struct ParseContext<'a> {
    arena: &'a Bump,
    depth: Cell<usize>,
    max_depth: usize,
}

impl<'a> ParseContext<'a> {
    fn check_depth(&self, pair: &Pair<Rule>) -> PestResult<()> {
        let current_depth = self.depth.get();
        if current_depth >= self.max_depth {
            return Err(custom_error(
                format!(
                    "expression nesting depth exceeds maximum of {} levels",
                    self.max_depth
                ),
                pair.as_span(),
            ));
        }
        self.depth.set(current_depth + 1);
        Ok(())
    }

    fn alloc(&self, expr: Expr<'a>) -> &'a Expr<'a> {
        self.arena.alloc(expr)
    }

    fn lowercase(&self, name: &str) -> &'a str {
        self.arena.alloc_str(&name.to_lowercase())
    }

    fn parse_expr(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        self.check_depth(&pair)?;
        let result = match pair.as_rule() {
            Rule::main => self.parse_main(pair),
            Rule::expression => self.parse_expression(pair),
            Rule::grouped => self.parse_grouped(pair),
            Rule::call => self.parse_call(pair),
            Rule::number => self.parse_number(pair),
            Rule::ident => self.parse_ident(pair),
            rule => Err(custom_error(
                format!("unhandled rule: {rule:?}"),
                pair.as_span(),
            )),
        };
        self.depth.set(self.depth.get() - 1);
        result
    }

    fn parse_main(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        let span = pair.as_span();
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| custom_error("missing expected pair in rule", span))?;
        self.parse_expr(inner)
    }

    fn parse_expression(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        PRATT_PARSER
            .map_primary(|primary| self.parse_expr(primary))
            .map_prefix(|op, rhs| {
                let operand = rhs?;
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::pos => UnaryOp::Pos,
                    Rule::invert => UnaryOp::Invert,
                    rule => unreachable!("Unknown prefix operator: {:?}", rule),
                };
                Ok(self.alloc(Expr::Unary { op, operand }))
            })
            .map_infix(|lhs, op, rhs| {
                let left = lhs?;
                let right = rhs?;
                let op = match op.as_rule() {
                    Rule::add => BinaryOp::Add,
                    Rule::sub => BinaryOp::Sub,
                    Rule::mul => BinaryOp::Mul,
                    Rule::div => BinaryOp::Div,
                    Rule::floor_div => BinaryOp::FloorDiv,
                    Rule::rem => BinaryOp::Rem,
                    Rule::pow => BinaryOp::Pow,
                    Rule::bit_and => BinaryOp::BitAnd,
                    Rule::bit_or => BinaryOp::BitOr,
                    Rule::shl => BinaryOp::Shl,
                    Rule::shr => BinaryOp::Shr,
                    rule => unreachable!("Unknown binary operator: {:?}", rule),
                };
                Ok(self.alloc(Expr::Binary { op, left, right }))
            })
            .parse(pair.into_inner())
    }

    fn parse_grouped(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        let span = pair.as_span();
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| custom_error("empty parentheses", span))?;
        self.parse_expr(inner)
    }

    fn parse_call(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();
        let name = inner
            .next()
            .ok_or_else(|| custom_error("missing function name", span))?;
        let name = self.lowercase(name.as_str());
        let args = inner
            .map(|arg| self.parse_argument(arg))
            .collect::<PestResult<Vec<_>>>()?;
        Ok(self.alloc(Expr::Call {
            name,
            args: self.arena.alloc_slice_copy(&args),
        }))
    }

    fn parse_argument(&self, pair: Pair<Rule>) -> PestResult<Argument<'a>> {
        if pair.as_rule() != Rule::keyword_arg {
            return Ok(Argument::Positional(self.parse_expr(pair)?));
        }
        let span = pair.as_span();
        let mut inner = pair.into_inner();
        let (Some(name), Some(value)) = (inner.next(), inner.next()) else {
            return Err(custom_error("malformed keyword argument", span));
        };
        Ok(Argument::Keyword {
            name: self.lowercase(name.as_str()),
            value: self.parse_expr(value)?,
        })
    }

    fn parse_number(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        let value = pair
            .as_str()
            .parse::<f64>()
            .map_err(|e| custom_error(format!("invalid number: {e}"), pair.as_span()))?;
        Ok(self.alloc(Expr::Number(value)))
    }

    fn parse_ident(&self, pair: Pair<Rule>) -> PestResult<&'a Expr<'a>> {
        Ok(self.alloc(Expr::Ident(self.lowercase(pair.as_str()))))
    }
}

/// Default maximum nesting depth for expression parsing.
/// This prevents stack overflow from deeply nested expressions like `(((((...(1)...)))))`.
pub const DEFAULT_MAX_PARSE_DEPTH: usize = 500;

/// Parses canonical expression text with the default maximum nesting depth.
///
/// For custom depth limits, use [`parse_with_max_depth`].
pub fn parse<'a>(arena: &'a Bump, source: &str) -> Result<&'a Expr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_PARSE_DEPTH)
}

/// Parses canonical expression text with a custom maximum nesting depth.
///
/// Identifiers are lowercased and copied into `arena`, so the returned tree
/// does not borrow from `source`.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &str,
    max_depth: usize,
) -> Result<&'a Expr<'a>, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::empty(source));
    }
    let mut pairs = ExpressionParser::parse(Rule::main, source).map_err(|e| {
        tracing::debug!("Pest parser failed with: {:?}", e);
        convert_pest_error(e, source)
    })?;
    let Some(pair) = pairs.next() else {
        return Err(ParseError::empty(source));
    };
    let context = ParseContext {
        arena,
        depth: Cell::new(0),
        max_depth,
    };
    context
        .parse_expr(pair)
        .map_err(|e| convert_pest_error(e, source))
}

//! Lexer for highlighting and tracking parentheses in the REPL.

use logos::Logos;

/// Tokens of calculator input as typed, before normalization.
///
/// Looser than the grammar: `2x`, `÷` and `реши` all lex, so the
/// highlighter can color anything the normalizer accepts.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+")]
    Number,

    /// Any run of letters: function names, constants, `x`, command words.
    #[regex(r"[\p{Alphabetic}_][\p{Alphabetic}0-9_]*")]
    Word,

    #[regex(r"\*\*|//|<<|>>|[-+*/%^&|~:÷×−]")]
    Operator,
}

/// Calculates how many parentheses are still open in `buffer`.
///
/// Returns `Some(depth)` where depth is the net nesting level (≥ 0),
/// or `None` if the buffer contains characters the lexer doesn't know.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}

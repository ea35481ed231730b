//! Syntax highlighter for the REPL.

use logos::Logos;
use nu_ansi_term::{Color, Style};
use reckon::evaluator::{VARIABLE, functions};
use reedline::StyledText;

use super::lexer::Token;

const PLAIN: Color = Color::White;
const NUMBER: Color = Color::Cyan;
const CONSTANT: Color = Color::Cyan;
const FUNCTION: Color = Color::Blue;
const VARIABLE_COLOR: Color = Color::Red;
const EQUALS: Color = Color::Magenta;
const UNKNOWN: Color = Color::Yellow;
const ERROR_BG: Color = Color::Rgb(0x80, 0x22, 0x3e);

#[derive(Debug, Default)]
pub struct Highlighter;

impl Highlighter {
    pub fn new() -> Self {
        Highlighter
    }
}

/// Style for a single token of `text`.
pub fn token_style(token: Result<Token, ()>, text: &str) -> Style {
    let fg = match token {
        Ok(Token::Number) => NUMBER,
        Ok(Token::Equals) => EQUALS,
        Ok(Token::Word) => word_color(text),
        Ok(Token::LParen | Token::RParen | Token::Comma | Token::Operator) => PLAIN,
        Err(()) => return Style::new().fg(PLAIN).on(ERROR_BG),
    };
    Style::new().fg(fg)
}

fn word_color(word: &str) -> Color {
    let lower = word.to_lowercase();
    if lower == VARIABLE || lower == "х" {
        VARIABLE_COLOR
    } else if functions::constant(&lower).is_some() {
        CONSTANT
    } else if functions::lookup(&lower).is_some() {
        FUNCTION
    } else {
        UNKNOWN
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(PLAIN);
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            if span.start > curr_end {
                output.push((plain, line[curr_end..span.start].to_string()));
            }
            let text = &line[span.clone()];
            output.push((token_style(token, text), text.to_string()));
            curr_end = span.end;
        }
        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}

//! Rewrites loosely written math into canonical arithmetic syntax.
//!
//! The rewrite is purely textual. It never fails; anything it cannot make
//! sense of is left alone for the parser to reject.

use lazy_static::lazy_static;
use regex::Regex;

/// Command words that may precede the actual problem, each followed by a
/// space. Matched case-insensitively and stripped once.
const COMMAND_PREFIXES: &[&str] = &["реши", "посчитай", "вычисли", "calculate", "calc", "solve"];

/// Characters rewritten one-for-one (or one-for-two) before anything else.
const SYMBOLS: &[(char, &str)] = &[
    ('÷', "/"),
    ('×', "*"),
    ('^', "**"),
    ('\u{2212}', "-"), // minus sign
    ('\u{2012}', "-"), // figure dash
    ('\u{2013}', "-"), // en dash
    ('\u{2014}', "-"), // em dash
    ('\u{FE63}', "-"), // small hyphen-minus
    ('\u{FF0D}', "-"), // fullwidth hyphen-minus
    ('X', "x"),
    ('Х', "x"), // Cyrillic capital ha
    ('х', "x"), // Cyrillic small ha
];

lazy_static! {
    // A colon not touching another colon or a slash.
    static ref COLON: Regex = Regex::new(r"(^|[^:/]):([^:/]|$)").unwrap();

    static ref NUMBER_PAREN: Regex = Regex::new(r"\b(\d+(?:\.\d+)?)\s*\(").unwrap();
    static ref NUMBER_NAME: Regex = Regex::new(
        r"\b(\d+(?:\.\d+)?)\s*(sin|cos|tan|asin|acos|atan|sqrt|abs|ln|log10|log|exp|round|floor|ceil|fact|pi|e)\b",
    )
    .unwrap();
    static ref PAREN_PAREN: Regex = Regex::new(r"\)\s*\(").unwrap();
    static ref PAREN_DIGIT: Regex = Regex::new(r"\)\s*(\d)").unwrap();
    static ref PAREN_X: Regex = Regex::new(r"\)\s*x").unwrap();
    // `2x3` and `2x(`: the `x` is a times sign.
    static ref TIMES_SIGN: Regex = Regex::new(r"(\d)\s*x(\d|\()").unwrap();
    // `2x` before an operator, `)`, `=` or the end: the `x` is the variable.
    static ref COEFFICIENT: Regex = Regex::new(r"(\d)\s*x([-+*/)=]|$)").unwrap();
    static ref X_PAREN: Regex = Regex::new(r"x\s*\(").unwrap();
    static ref X_DIGIT: Regex = Regex::new(r"x\s*(\d)").unwrap();
}

/// Canonicalizes `text`: trims it, maps unicode operators and alternate
/// spellings of `x`, inserts implicit multiplication and strips a leading
/// command word.
///
/// ```
/// use reckon_core::normalize;
///
/// assert_eq!(normalize("2×(3+4)"), "2*(3+4)");
/// assert_eq!(normalize("3^2"), "3**2");
/// assert_eq!(normalize("2x+3=7"), "2*x+3=7");
/// assert_eq!(normalize("2x3"), "2*3");
/// assert_eq!(normalize("solve x=1"), "x=1");
/// ```
pub fn normalize(text: &str) -> String {
    let mut prepared = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match SYMBOLS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => prepared.push_str(to),
            None => prepared.push(c),
        }
    }

    let prepared = rewrite(&COLON, prepared, "${1}/${2}");
    let prepared = rewrite(&NUMBER_PAREN, prepared, "${1}*(");
    let prepared = rewrite(&NUMBER_NAME, prepared, "${1}*${2}");
    let prepared = rewrite(&PAREN_PAREN, prepared, ")*(");
    let prepared = rewrite(&PAREN_DIGIT, prepared, ")*${1}");
    let prepared = rewrite(&PAREN_X, prepared, ")*x");
    let prepared = rewrite(&TIMES_SIGN, prepared, "${1}*${2}");
    let prepared = rewrite(&COEFFICIENT, prepared, "${1}*x${2}");
    let prepared = rewrite(&X_PAREN, prepared, "x*(");
    let prepared = rewrite(&X_DIGIT, prepared, "x*${1}");

    let stripped = strip_command_prefix(&prepared).to_string();
    tracing::debug!(input = text, normalized = %stripped, "normalized input");
    stripped
}

// Applies `replacement` until `pattern` stops matching. Repeating the pass
// lets adjacent matches that share a character (`1:2:3`, `2x3x4`) all be
// rewritten without lookaround support.
fn rewrite(pattern: &Regex, mut text: String, replacement: &str) -> String {
    while pattern.is_match(&text) {
        text = pattern.replace_all(&text, replacement).into_owned();
    }
    text
}

fn strip_command_prefix(text: &str) -> &str {
    for prefix in COMMAND_PREFIXES {
        let mut chars = text.char_indices();
        let matches = prefix.chars().all(|expected| {
            chars
                .next()
                .is_some_and(|(_, c)| c.to_lowercase().eq(expected.to_lowercase()))
        });
        if !matches {
            continue;
        }
        if let Some((space, ' ')) = chars.next() {
            return text[space + 1..].trim();
        }
    }
    text
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

//! Error rendering using ariadne
//!
//! Syntax errors carry the canonical text they were raised against, so they
//! are rendered as a labelled source snippet. Every other error is a single
//! line with its code.

use crate::{Error, ErrorKind};
use ariadne::{Color, ColorGenerator, Fmt, Label, Report, ReportKind, Source};
use reckon_core::parser::ParseError;
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name shown in the snippet header.
    /// Defaults to "<input>" if not provided.
    pub filename: Option<&'a str>,
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use reckon::{evaluate_expression, render_error};
///
/// if let Err(e) = evaluate_expression("1 + * 2") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use reckon::{RenderConfig, evaluate_expression, render_error_to};
///
/// let err = evaluate_expression("sqrt(-4)").unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     "[E008] Error: math domain error in `sqrt`: negative argument\n",
/// );
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<input>");
    let code = error.kind().code();

    if let Some(parse_error) = error.as_parse_error() {
        return render_parse_error(parse_error, code, writer, config, filename);
    }

    let label = if config.color {
        format!("{}", "Error:".fg(Color::Red))
    } else {
        "Error:".to_string()
    };
    writeln!(writer, "[{code}] {label} {error}")?;
    if let Some(help) = help(error.kind()) {
        writeln!(writer, "Help: {help}")?;
    }
    Ok(())
}

fn render_parse_error(
    error: &ParseError,
    code: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
    filename: &str,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    // Spans are byte offsets into the canonical text.
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    let span = error.span.0.clone();
    let report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(&error.message)
        .with_config(ariadne_config)
        .with_code(code)
        .with_label(
            Label::new((filename, span))
                .with_message(&error.message)
                .with_color(colors.next()),
        );

    report
        .finish()
        .write((filename, Source::from(error.input.as_str())), &mut *writer)
}

fn help(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::UndefinedVariable => Some("`x` only has a value when solving an equation"),
        ErrorKind::KeywordArgsNotSupported => Some("pass arguments by position"),
        ErrorKind::NoSolutionFound => Some("try a wider range with --min and --max"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate_expression;
    use expect_test::{Expect, expect};

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.calc"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("test.calc"),
        charset: CharSet::Ascii,
    };

    fn render_error_string(source: &str, config: &RenderConfig) -> String {
        match evaluate_expression(source) {
            Err(e) => {
                let mut buf = Vec::new();
                render_error_to(&e, &mut buf, config).unwrap();
                String::from_utf8_lossy(&buf).into_owned()
            }
            Ok(value) => panic!("Expected an error for {source}, got {value}"),
        }
    }

    fn check_error(source: &str, config: &RenderConfig, expected: Expect) {
        let output = render_error_string(source, config);
        expected.assert_eq(&output);
    }

    #[test]
    fn test_parse_error_unicode() {
        check_error(
            "1 + * 2",
            &UNICODE_CONFIG,
            expect![[r#"
                [E002] Error: unexpected `*`
                   ╭─[ test.calc:1:5 ]
                   │
                 1 │ 1 + * 2
                   │     │ 
                   │     ╰─ unexpected `*`
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_parse_error_ascii() {
        check_error(
            "1 + * 2",
            &ASCII_CONFIG,
            expect![[r#"
                [E002] Error: unexpected `*`
                   ,-[ test.calc:1:5 ]
                   |
                 1 | 1 + * 2
                   |     | 
                   |     `- unexpected `*`
                ---'
            "#]],
        );
    }

    #[test]
    fn test_parse_error_after_cyrillic() {
        check_error(
            "два + * 2",
            &UNICODE_CONFIG,
            expect![[r#"
                [E002] Error: unexpected `*`
                   ╭─[ test.calc:1:7 ]
                   │
                 1 │ два + * 2
                   │       │ 
                   │       ╰─ unexpected `*`
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_unexpected_end_of_input() {
        check_error(
            "(1 + 2",
            &UNICODE_CONFIG,
            expect![[r#"
                [E002] Error: unexpected end of input
                   ╭─[ test.calc:1:7 ]
                   │
                 1 │ (1 + 2
                   │       │ 
                   │       ╰─ unexpected end of input
                ───╯
            "#]],
        );
    }

    #[test]
    fn test_evaluation_error_is_one_line() {
        check_error(
            "1/0",
            &UNICODE_CONFIG,
            expect![[r#"
                [E008] Error: math domain error in `/`: division by zero
            "#]],
        );
    }

    #[test]
    fn test_error_with_help() {
        check_error(
            "x + 1",
            &ASCII_CONFIG,
            expect![[r#"
                [E004] Error: variable `x` can only be used in an equation
                Help: `x` only has a value when solving an equation
            "#]],
        );
    }

    #[test]
    fn test_default_filename() {
        let err = evaluate_expression("2 +").unwrap_err();
        let mut buf = Vec::new();
        let config = RenderConfig {
            color: false,
            ..Default::default()
        };
        render_error_to(&err, &mut buf, &config).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("<input>:1:4"), "{output}");
    }
}

//! Integration tests for the public API.
//!
//! These go through the whole pipeline: normalization, parsing, evaluation
//! or solving, and formatting.

use pretty_assertions::assert_eq;
use reckon_core::solver::{Method, SolverOptions};
use reckon_core::{Calculator, CalculatorOptions, ErrorKind, evaluate_expression, solve};

fn eval_kind(text: &str) -> ErrorKind {
    match evaluate_expression(text) {
        Ok(value) => panic!("expected {text:?} to fail, got {value}"),
        Err(e) => e.kind(),
    }
}

#[test]
fn test_basic_evaluation() {
    assert_eq!(evaluate_expression("2+2").unwrap(), "4");
    assert_eq!(evaluate_expression("10/4").unwrap(), "2.5");
    assert_eq!(evaluate_expression("2×(3+4)").unwrap(), "14");
    assert_eq!(evaluate_expression("sin(pi/2)+sqrt(16)").unwrap(), "5");
    assert_eq!(evaluate_expression("1/3").unwrap(), "0.3333333333");
}

#[test]
fn test_evaluation_is_deterministic() {
    let first = evaluate_expression("exp(1.5)*ln(7)/3").unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate_expression("exp(1.5)*ln(7)/3").unwrap(), first);
    }
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(evaluate_expression("2(3+4)").unwrap(), "14");
    assert_eq!(evaluate_expression("2sin(0)").unwrap(), "0");
    assert_eq!(evaluate_expression("(1+1)(2+2)").unwrap(), "8");
    assert_eq!(evaluate_expression("2x3").unwrap(), "6");
    assert_eq!(evaluate_expression("2pi").unwrap(), "6.2831853072");
}

#[test]
fn test_loose_input() {
    assert_eq!(evaluate_expression("  8 ÷ 2 ").unwrap(), "4");
    assert_eq!(evaluate_expression("6:4").unwrap(), "1.5");
    assert_eq!(evaluate_expression("10 − 4").unwrap(), "6");
    assert_eq!(evaluate_expression("посчитай 2^10").unwrap(), "1024");
    assert_eq!(evaluate_expression("calc SQRT(2)^2").unwrap(), "2");
}

#[test]
fn test_injection_is_rejected() {
    assert_eq!(eval_kind("__import__"), ErrorKind::UnknownIdentifier);
    assert_eq!(eval_kind("eval"), ErrorKind::UnknownIdentifier);
    assert_eq!(eval_kind("os"), ErrorKind::UnknownIdentifier);
    assert_eq!(eval_kind("__import__('os')"), ErrorKind::SyntaxError);
    assert_eq!(eval_kind("os.system(1)"), ErrorKind::SyntaxError);
    assert_eq!(eval_kind("open(1)"), ErrorKind::UnsupportedCall);
    assert_eq!(eval_kind("[1][0]"), ErrorKind::SyntaxError);
}

#[test]
fn test_factorial_domain() {
    assert_eq!(evaluate_expression("fact(5)").unwrap(), "120");
    assert_eq!(eval_kind("fact(-1)"), ErrorKind::DomainError);
    assert_eq!(eval_kind("fact(101)"), ErrorKind::DomainError);
    assert_eq!(eval_kind("fact(18)"), ErrorKind::Overflow);
}

#[test]
fn test_bounds() {
    let nested = format!("{}1{}", "(".repeat(45), "+1)".repeat(45));
    assert_eq!(eval_kind(&nested), ErrorKind::TooDeep);
    assert_eq!(eval_kind("10^20"), ErrorKind::Overflow);
    assert_eq!(eval_kind("10^15*10"), ErrorKind::Overflow);
}

#[test]
fn test_error_kinds() {
    assert_eq!(eval_kind(""), ErrorKind::SyntaxError);
    assert_eq!(eval_kind("   "), ErrorKind::SyntaxError);
    assert_eq!(eval_kind("1+"), ErrorKind::SyntaxError);
    assert_eq!(eval_kind("(1"), ErrorKind::SyntaxError);
    assert_eq!(eval_kind("x+1"), ErrorKind::UndefinedVariable);
    assert_eq!(eval_kind("sin(1,2)"), ErrorKind::ArityMismatch);
    assert_eq!(
        eval_kind("round(1.5, ndigits=0)"),
        ErrorKind::KeywordArgsNotSupported
    );
    assert_eq!(eval_kind("sqrt(-4)"), ErrorKind::DomainError);
    assert_eq!(eval_kind("1/0"), ErrorKind::DomainError);
    assert_eq!(eval_kind("6&3"), ErrorKind::UnsupportedExpression);
}

#[test]
fn test_length_ceiling() {
    let at_limit = format!("1{}", "+1".repeat(109));
    assert_eq!(at_limit.chars().count(), 219);
    assert_eq!(evaluate_expression(&at_limit).unwrap(), "110");

    let too_long = "1".repeat(221);
    assert_eq!(eval_kind(&too_long), ErrorKind::LengthExceeded);

    // Counted in chars, not bytes.
    let cyrillic = format!("{}1", "ж".repeat(220));
    assert_eq!(eval_kind(&cyrillic), ErrorKind::LengthExceeded);
}

#[test]
fn test_length_is_checked_again_after_normalization() {
    // 200 chars in, more than 220 once every `^` becomes `**`.
    let text = format!("1{}", "^1".repeat(99));
    assert!(text.chars().count() <= 220);
    assert_eq!(eval_kind(&text), ErrorKind::LengthExceeded);
}

#[test]
fn test_solve_quadratic() {
    assert_eq!(solve("x^2-5*x+6=0").unwrap(), "x1 = 2\nx2 = 3");
    assert_eq!(solve("x^2-5x+6=0").unwrap(), "x1 = 2\nx2 = 3");
    assert_eq!(solve("Х^2 = 4").unwrap(), "x1 = -2\nx2 = 2");
    assert_eq!(solve("реши 2x+3=7").unwrap(), "x = 2");
}

#[test]
fn test_solve_takes_exact_path_for_polynomials() {
    let calculator = Calculator::default();
    let solution = calculator.solve_equation("x^2-5*x+6=0").unwrap();
    assert_eq!(solution.method(), Method::Exact);
    assert_eq!(solution.roots().unwrap().as_slice(), &[2.0, 3.0]);
}

#[test]
fn test_solve_edge_cases() {
    assert_eq!(solve("0=1").unwrap(), "no solution");
    assert_eq!(solve("x-x=0").unwrap(), "infinitely many solutions");
    assert_eq!(solve("x^2=-1").unwrap(), "no real solution");
}

#[test]
fn test_solve_transcendental() {
    let calculator = Calculator::default();
    let solution = calculator.solve_equation("sin(x)=0").unwrap();
    assert_eq!(solution.method(), Method::Numeric);
    assert!(solution.roots().unwrap().contains_near(0.0, 1e-5));

    assert_eq!(solve("2^x=8").unwrap(), "x = 3");
}

#[test]
fn test_solve_falls_back_to_evaluation() {
    assert_eq!(solve("2+2").unwrap(), "4");
    assert_eq!(solve("round(2.567, 2)").unwrap(), "2.57");
    assert_eq!(
        solve("x+1").unwrap_err().kind(),
        ErrorKind::UndefinedVariable
    );
}

#[test]
fn test_solve_errors() {
    assert_eq!(
        solve("x=1=2").unwrap_err().kind(),
        ErrorKind::MalformedEquation
    );
    assert_eq!(solve("x=").unwrap_err().kind(), ErrorKind::MalformedEquation);
    assert_eq!(solve("x=)").unwrap_err().kind(), ErrorKind::SyntaxError);
    assert_eq!(
        solve("exp(x)=-1").unwrap_err().kind(),
        ErrorKind::NoSolutionFound
    );
}

#[test]
fn test_custom_options() {
    let calculator = Calculator::new(CalculatorOptions {
        max_input_len: 10,
        solver: SolverOptions {
            min: 100.0,
            max: 200.0,
            ..SolverOptions::default()
        },
        ..CalculatorOptions::default()
    });

    assert_eq!(
        calculator.evaluate("1+1+1+1+1+1").unwrap_err().kind(),
        ErrorKind::LengthExceeded
    );
    assert_eq!(calculator.solve("sqrt(x)=11").unwrap(), "x = 121");
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calculator = std::sync::Arc::new(Calculator::default());
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let calculator = calculator.clone();
            std::thread::spawn(move || calculator.solve(&format!("x*{n}={}", n * 2)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "x = 2");
    }
}

#[macro_use]
mod cases;

use reckon::ErrorKind;

test_case! {
    name: implicit_multiplication,
    input: "2(3+4)",
    value: { "14" },
    solution: { "14" },
}

test_case! {
    name: unicode_operators,
    input: "12 ÷ 4 × 2 − 1",
    value: { "5" },
}

test_case! {
    name: command_prefix,
    input: "вычисли 2^10",
    value: { "1024" },
}

test_case! {
    name: floor_division_rounds_down,
    input: "-7 // 2",
    value: { "-4" },
}

test_case! {
    name: modulo_takes_divisor_sign,
    input: "-7 % 3",
    value: { "2" },
}

test_case! {
    name: unary_minus_binds_looser_than_power,
    input: "-2**2",
    value: { "-4" },
}

test_case! {
    name: power_is_right_associative,
    input: "2**3**2",
    value: { "512" },
}

test_case! {
    name: round_half_to_even,
    input: "round(2.5)",
    value: { "2" },
}

test_case! {
    name: log_with_base,
    input: "log(8, 2)",
    value: { "3" },
}

test_case! {
    name: quadratic,
    input: "x^2-5x+6=0",
    solution: { "x1 = 2\nx2 = 3" },
}

test_case! {
    name: cyrillic_variable,
    input: "реши 3х-3 = 0",
    solution: { "x = 1" },
}

test_case! {
    name: equation_with_unit_coefficient,
    input: "x = 7:2",
    solution: { "x = 3.5" },
}

test_case! {
    name: numeric_fallback,
    input: "2^x = 1024",
    solution: { "x = 10" },
}

test_case! {
    name: no_solution,
    input: "x + 1 = x",
    solution: { "no solution" },
}

test_case! {
    name: identity,
    input: "2(x+1) = 2x+2",
    solution: { "infinitely many solutions" },
}

test_case! {
    name: complex_roots,
    input: "x^2 + 4 = 0",
    solution: { "no real solution" },
}

test_case! {
    name: injected_identifier,
    input: "__import__",
    kind: { Ok(ErrorKind::UnknownIdentifier) },
}

test_case! {
    name: attribute_access,
    input: "(1).real",
    kind: { Ok(ErrorKind::SyntaxError) },
}

test_case! {
    name: bitwise_operator,
    input: "6 | 3",
    kind: { Ok(ErrorKind::UnsupportedExpression) },
}

test_case! {
    name: exponent_limit,
    input: "2**13",
    kind: { Ok(ErrorKind::Overflow) },
}

test_case! {
    name: two_equals_signs,
    input: "x = 1 = 2",
    kind: { Ok(ErrorKind::MalformedEquation) },
}

test_case! {
    name: no_root_in_range,
    input: "x^3 + 1 = sqrt(x) - 5",
    kind: { Ok(ErrorKind::NoSolutionFound) },
}

test_case! {
    name: syntax_error_snippet,
    input: "1 + * 2",
    error: { "[E002] Error: unexpected `*`\n   ╭─[ <input>:1:5 ]\n   │\n 1 │ 1 + * 2\n   │     │\n   │     ╰─ unexpected `*`\n───╯\n" },
}

test_case! {
    name: syntax_error_in_equation,
    input: "x + 1 = 2 *",
    error: { "[E002] Error: unexpected end of input\n   ╭─[ <input>:1:12 ]\n   │\n 1 │ x + 1 = 2 *\n   │            │\n   │            ╰─ unexpected end of input\n───╯\n" },
}

test_case! {
    name: domain_error_message,
    input: "sqrt(-1)",
    error: { "[E008] Error: math domain error in `sqrt`: negative argument\n" },
}

test_case! {
    name: keyword_argument_with_right_arity,
    input: "sin(1, a=2)",
    kind: { Ok(ErrorKind::KeywordArgsNotSupported) },
}

test_case! {
    name: keyword_argument_only,
    input: "sin(a=2)",
    kind: { Ok(ErrorKind::ArityMismatch) },
}

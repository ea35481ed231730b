/// Values closer to zero than this print as `0`.
const ZERO_SNAP: f64 = 1e-12;

/// Renders a result for display.
///
/// Integral values print without a decimal point; everything else prints
/// with at most ten decimals and no trailing zeros.
///
/// ```
/// use reckon_core::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(1e-13), "0");
/// ```
pub fn format_number(value: f64) -> String {
    let value = if value.abs() < ZERO_SNAP { 0.0 } else { value };
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.10}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

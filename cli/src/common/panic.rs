//! Panic handler for user-friendly crash reporting.

use std::cell::RefCell;
use std::panic::PanicHookInfo;

thread_local! {
    /// The input being computed (for REPL crash reports).
    static CURRENT_INPUT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Remember the input being computed.
///
/// Call this before handing user input to the calculator in the REPL.
pub fn set_current_input(input: &str) {
    CURRENT_INPUT.with(|cell| {
        *cell.borrow_mut() = Some(input.to_string());
    });
}

/// Forget the current input once it has been handled.
pub fn clear_current_input() {
    CURRENT_INPUT.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

fn current_input() -> Option<String> {
    CURRENT_INPUT.with(|cell| cell.borrow().clone())
}

/// Install the custom panic handler.
///
/// This should be called early in main() before any other initialization.
pub fn install_handler() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicHookInfo<'_>) {
    eprintln!("\nReckon crashed unexpectedly!\n");
    eprint!("{}", crash_report(info));
}

/// Details worth pasting into a bug report.
fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let message = info
        .payload()
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
        .unwrap_or("unknown");

    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());

    let command_line: Vec<String> = std::env::args().skip(1).collect();

    format_report(message, &location, &command_line, current_input().as_deref())
}

fn format_report(
    message: &str,
    location: &str,
    command_line: &[String],
    input: Option<&str>,
) -> String {
    let mut report = format!(
        "message:  {message}\nlocation: {location}\nversion:  {} ({} {})\n",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );
    if !command_line.is_empty() {
        report.push_str(&format!("command:  reckon {}\n", command_line.join(" ")));
    }
    if let Some(input) = input {
        report.push_str(&format!("input:    {input:?}\n"));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_local_input_set_get_clear() {
        assert!(current_input().is_none());

        set_current_input("x^2=4");
        assert_eq!(current_input(), Some("x^2=4".to_string()));

        clear_current_input();
        assert!(current_input().is_none());
    }

    #[test]
    fn report_includes_command_and_input() {
        let report = format_report(
            "boom",
            "src/main.rs:1:1",
            &["solve".to_string(), "x=1".to_string()],
            Some("x=1"),
        );
        assert!(report.starts_with("message:  boom\nlocation: src/main.rs:1:1\n"));
        assert!(report.contains("command:  reckon solve x=1\n"));
        assert!(report.ends_with("input:    \"x=1\"\n"));
    }

    #[test]
    fn report_without_command_or_input() {
        let report = format_report("boom", "unknown", &[], None);
        assert!(!report.contains("command:"));
        assert!(!report.contains("input:"));
    }
}

//! The `repl` command - interactive REPL.

pub mod highlighter;
pub mod lexer;

use bumpalo::Bump;
use nu_ansi_term::Style;
use reckon::evaluator::functions::{BUILTINS, CONSTANTS};
use reckon::{Calculator, is_equation, normalize, parser};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    FileBackedHistory, IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, ValidationResult, default_emacs_keybindings,
};

use crate::cli::ReplArgs;
use crate::common::{
    CliError, CliResult, calculator::build_calculator, error::render, panic as panic_handler,
};
use highlighter::Highlighter;
use lexer::calculate_depth;

const HELP: &str = "\
Type an expression to compute it, or an equation in x to solve it.

  2(3+4)          implicit multiplication
  7:2             `:` and `÷` divide, `×` multiplies, `^` raises
  x^2-5x+6=0      quadratics are solved exactly
  sin(x)=0.5      anything else is scanned numerically

Functions: sin cos tan asin acos atan sqrt abs ln log log10 exp round floor ceil fact
Constants: pi e";

/// A `reedline` validator that keeps reading while the input is
/// unfinished.
///
/// Input is incomplete when a parenthesis is still open, or when it is a
/// plain expression whose only syntax error is running out of input.
///
/// # Examples of Incomplete Input
///
/// - `2 * (3 +`
/// - `1 +`
///
/// # Manual Newlines
///
/// To split a complete expression across multiple lines for readability,
/// users can press `Alt + Enter` to insert a newline manually.
struct CalcValidator;

impl reedline::Validator for CalcValidator {
    fn validate(&self, input: &str) -> ValidationResult {
        if is_incomplete(input) {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}

/// Whether the REPL should keep reading before computing `input`.
pub fn is_incomplete(input: &str) -> bool {
    if matches!(calculate_depth(input), Some(depth) if depth > 0) {
        return true;
    }

    let canonical = normalize(input);
    if canonical.is_empty() || is_equation(&canonical) {
        return false;
    }
    let arena = Bump::new();
    match parser::parse(&arena, &canonical) {
        Ok(_) => false,
        Err(e) => e.span.start() >= canonical.len(),
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

/// Words offered by tab completion.
pub fn completion_words() -> Vec<String> {
    BUILTINS
        .iter()
        .map(|builtin| builtin.name)
        .chain(CONSTANTS.iter().map(|(name, _)| *name))
        .chain(["help"])
        .map(str::to_string)
        .collect()
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['_']);
        completions.insert(completion_words());
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter::new()))
        .with_validator(Box::new(CalcValidator))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    match dirs::config_dir()
        .map(|p| p.join("reckon/history"))
        .and_then(|p| FileBackedHistory::with_file(10000, p).ok())
    {
        Some(history) => line_editor = line_editor.with_history(Box::new(history)),
        None => tracing::warn!("could not open the history file, history will not be saved"),
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("  ".into()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Run the REPL command.
pub fn run(args: ReplArgs, no_color: bool) -> CliResult<()> {
    let calculator = build_calculator(&args.range)?;
    let (mut line_editor, prompt) = setup_reedline();

    let style = Style::new().dimmed();
    println!(
        "Reckon REPL. {}",
        style.paint("Type `help` for examples; Ctrl+D to exit; Ctrl+C to abort entry")
    );

    loop {
        let sig = match line_editor.read_line(&prompt) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Reedline error: {e}");
                return Ok(());
            }
        };

        match sig {
            Signal::Success(buffer) if buffer.trim().is_empty() => continue,
            Signal::Success(buffer) if buffer.trim().eq_ignore_ascii_case("help") => {
                println!("{HELP}");
            }
            Signal::Success(buffer) => {
                // Set current input for panic handler (crash reports)
                panic_handler::set_current_input(&buffer);
                interpret_line(&calculator, &buffer, no_color);
                panic_handler::clear_current_input();
            }
            Signal::CtrlD => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Signal::CtrlC => {
                continue;
            }
        }
    }
}

/// Compute one line and print the answer, or render the error. Errors
/// don't end the session.
fn interpret_line(calculator: &Calculator, line: &str, no_color: bool) {
    match calculator.solve(line) {
        Ok(answer) => println!("{answer}"),
        Err(e) => render(&CliError::from(e), no_color),
    }
}

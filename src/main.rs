use std::fs;

use clap::Parser;
use cplx::{ComplexNumber, Notifier, ValueSource, ast::Expr, compare, evaluate, render};
use rustyline::{DefaultEditor, error::ReadlineError};

/// cplx evaluates arithmetic over complex numbers, asking for the value of
/// every variable the first time it is needed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the syntax tree of each evaluated expression.
    #[arg(short, long)]
    tree: bool,

    /// Tells cplx to read expressions from a file, one per line.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// Check whether two expressions are equivalent instead of evaluating.
    #[arg(short, long, num_args = 2, value_names = ["LEFT", "RIGHT"], conflicts_with = "expression")]
    compare: Option<Vec<String>>,

    /// The expression to evaluate, or a path with `--file`. Starts an
    /// interactive session when omitted.
    expression: Option<String>,
}

/// Writes progress messages to stderr, keeping stdout for results.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("> ERROR: {message}");
        } else {
            eprintln!("> {message}");
        }
    }
}

/// Asks for variable values on the terminal.
struct PromptSource<'a> {
    editor: &'a mut DefaultEditor,
}

impl ValueSource for PromptSource<'_> {
    fn request_value(&mut self, name: &str) -> Option<String> {
        match self.editor
                  .readline(&format!("value for '{name}' (e.g. 3+2i or 5): "))
        {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(err) => {
                log::warn!("could not read a value for {name}: {err}");
                None
            },
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(pair) = &args.compare {
        run_compare(&pair[0], &pair[1]);
        return;
    }

    let mut editor = open_editor();
    match args.expression {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            for line in script.lines().filter(|l| !l.trim().is_empty()) {
                run_expression(line, args.tree, &mut editor);
            }
        },
        Some(expression) => run_expression(&expression, args.tree, &mut editor),
        None => run_repl(args.tree, &mut editor),
    }
}

/// Opens the line editor used for the REPL and for variable prompts.
fn open_editor() -> DefaultEditor {
    DefaultEditor::new().unwrap_or_else(|e| {
                            eprintln!("Failed to open the terminal: {e}");
                            std::process::exit(1);
                        })
}

fn run_expression(source: &str, tree: bool, editor: &mut DefaultEditor) {
    let mut values = PromptSource { editor };
    let mut notifier = ConsoleNotifier;

    match evaluate(source, &mut values, &mut notifier) {
        Ok((value, expr)) => print_result(value, &expr, tree),
        Err(e) => notifier.notify(&e.to_string(), true),
    }
}

fn print_result(value: ComplexNumber, expr: &Expr, tree: bool) {
    let variables = expr.variables();
    if !variables.is_empty() {
        log::info!("variables used: {variables:?}");
    }
    if tree {
        print!("{}", render::tree(expr));
    }
    println!("{value}");
}

fn run_compare(left: &str, right: &str) {
    match compare(left, right) {
        Ok(comparison) => println!("{comparison}"),
        Err(e) => ConsoleNotifier.notify(&format!("Comparison failed: {e}"), true),
    }
}

fn run_repl(tree: bool, editor: &mut DefaultEditor) {
    println!("Type an expression, :compare, :clear or :quit.");
    loop {
        let line = match editor.readline("cplx> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            },
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        match line {
            ":quit" | ":q" => break,
            ":clear" => {
                let _ = editor.clear_screen();
            },
            ":compare" => {
                let left = editor.readline("expression 1: ");
                let right = editor.readline("expression 2: ");
                if let (Ok(left), Ok(right)) = (left, right)
                   && !left.trim().is_empty()
                   && !right.trim().is_empty()
                {
                    run_compare(&left, &right);
                }
            },
            expression => run_expression(expression, tree, editor),
        }
    }
}

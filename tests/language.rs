use std::fs::{self};

use cplx::{
    Comparison, ComplexNumber, compare,
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::scripted::{RecordingNotifier, ScriptedSource},
        lexer::{Token, tokenize},
    },
};
use walkdir::WalkDir;

fn run(src: &str) -> Result<ComplexNumber, Error> {
    let mut values = ScriptedSource::default();
    let mut notifier = RecordingNotifier::new();
    evaluate(src, &mut values, &mut notifier).map(|(value, _)| value)
}

fn assert_value(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_close(src: &str, expected: ComplexNumber) {
    let value = run(src).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"));
    assert!(value.distance(expected) < 1e-9,
            "{src:?} evaluated to {value:?}, expected {expected:?}");
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_cplx_blocks(&content) {
            for line in block.lines().filter(|l| !l.trim().is_empty()) {
                let (src, expected) =
                    line.split_once("=>")
                        .unwrap_or_else(|| panic!("Example in {path:?} lacks '=>': {line}"));
                count += 1;
                assert_value(src.trim(), expected.trim());
            }
        }
    }

    assert!(count > 0, "No cplx examples found in book/src");
}

fn extract_cplx_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```cplx") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/example.cplx").expect("example script is readable");
    let mut evaluated = 0;

    for line in script.lines()
                      .map(str::trim)
                      .filter(|l| !l.is_empty() && !l.starts_with('#'))
    {
        if let Err(e) = run(line) {
            panic!("Line {line:?} of example.cplx failed: {e}");
        }
        evaluated += 1;
    }

    assert!(evaluated > 0);
}

#[test]
fn tokenizes_complex_literal() {
    let tokens: Vec<Token> = tokenize("3+2i").unwrap()
                                             .into_iter()
                                             .map(|(tok, _)| tok)
                                             .collect();
    assert_eq!(tokens, [Token::Real(3.0), Token::Plus, Token::Imaginary(2.0)]);
}

#[test]
fn tokens_carry_positions() {
    let positions: Vec<usize> = tokenize("x ** root(2)").unwrap()
                                                        .into_iter()
                                                        .map(|(_, pos)| pos)
                                                        .collect();
    // Offsets refer to "x**root(2)".
    assert_eq!(positions, [0, 1, 3, 7, 8, 9]);
}

#[test]
fn keywords_beat_identifiers() {
    let tokens = tokenize("rooted root i ix").unwrap();
    // Whitespace is removed first, so this is one long identifier.
    assert_eq!(tokens.len(), 1);

    let tokens: Vec<Token> = tokenize("root(i)*conjugate(x)").unwrap()
                                                             .into_iter()
                                                             .map(|(tok, _)| tok)
                                                             .collect();
    assert_eq!(tokens[0], Token::Function(cplx::ast::Function::Root));
    assert_eq!(tokens[2], Token::Imaginary(1.0));
    assert_eq!(tokens[5], Token::Function(cplx::ast::Function::Conjugate));
    assert_eq!(tokens[7], Token::Identifier("x".to_string()));
}

#[test]
fn lone_i_is_the_imaginary_unit() {
    assert_eq!(tokenize("i").unwrap(), [(Token::Imaginary(1.0), 0)]);
    assert_eq!(tokenize("ix").unwrap(), [(Token::Identifier("ix".to_string()), 0)]);
    assert_eq!(tokenize("2*i").unwrap()[2], (Token::Imaginary(1.0), 2));
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3", "5 + 0i");
    assert_value("2i*3i", "-6 + 0i");
    assert_value("10-4-3", "3 + 0i");
    assert_value("8/2/2", "2 + 0i");
    assert_value("2*3+4", "10 + 0i");
    assert_value("2*(3+4)", "14 + 0i");
    assert_value("(1+2i)*(3-i)", "5 + 5i");
    assert_value("6/(1+i)", "3 - 3i");
}

#[test]
fn unary_signs() {
    assert_value("-3", "-3 + 0i");
    assert_value("--3", "3 + 0i");
    assert_value("+4i", "0 + 4i");
    assert_value("2*-i", "0 - 2i");
}

#[test]
fn exponent_is_right_associative() {
    assert_value("2**3**2", "512 + 0i");
    assert_value("(2**3)**2", "64 + 0i");
}

#[test]
fn exponent_uses_only_real_part() {
    assert_eq!(run("3**(2+7i)").unwrap(), run("3**2").unwrap());
}

#[test]
fn builtin_functions() {
    assert_close("root(-1)", ComplexNumber::new(0.0, 1.0));
    assert_value("root(-1)", "0 + 1i");
    assert_value("root(4)", "2 + 0i");
    assert_value("conjugate(3+4i)", "3 - 4i");
    assert_value("conjugate(conjugate(1-2i))", "1 - 2i");
}

#[test]
fn display_rounds_to_four_decimals() {
    assert_value("1/3", "0.3333 + 0i");
    assert_value("2/3", "0.6667 + 0i");
    assert_value("i**2", "-1 + 0i");
}

#[test]
fn cancelling_cross_terms_leave_positive_zero() {
    assert_value("(1.1+1.3i)*(1.1-1.3i)", "2.9 + 0i");
    assert_value("(0.1+0.3i)*conjugate(0.1+0.3i)", "0.1 + 0i");
    assert_value("(0.3+0.7i)/(0.3+0.7i)", "1 + 0i");

    let product = run("(1.1+1.3i)*(1.1-1.3i)").unwrap();
    assert_eq!(product.imaginary, 0.0);
}

#[test]
fn multi_dot_literal_reads_leading_number() {
    assert_value("1.2.3", "1.2 + 0i");
    assert_value("2.5i", "0 + 2.5i");
}

#[test]
fn division_by_zero_fails() {
    assert!(matches!(assert_failure("1/(1-1)"), Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(assert_failure("i/0"), Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("(2+3"),
                     Error::Parse(ParseError::UnmatchedParenthesis { position: 0 })));
    assert!(matches!(assert_failure("2+"), Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(assert_failure(""), Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(assert_failure("2)"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { position: 1, .. })));
    assert!(matches!(assert_failure("*2"),
                     Error::Parse(ParseError::UnexpectedToken { position: 0, .. })));
}

#[test]
fn deep_nesting_is_an_error() {
    let signs = format!("{}x", "-".repeat(100_000));
    assert!(matches!(compare(&signs, "x"),
                     Err(Error::Parse(ParseError::NestingTooDeep { position: 256 }))));

    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(assert_failure(&parens),
                     Error::Parse(ParseError::NestingTooDeep { .. })));

    assert_value(&format!("{}2{}", "(".repeat(100), ")".repeat(100)), "2 + 0i");
}

#[test]
fn invalid_character_is_lexical() {
    let err = assert_failure("@");
    assert!(err.is_lexical());
    assert!(matches!(err,
                     Error::Parse(ParseError::InvalidCharacter { character: '@',
                                                                 position:  0, })));

    let err = assert_failure("1 + 2 $ 3");
    assert!(matches!(err,
                     Error::Parse(ParseError::InvalidCharacter { character: '$',
                                                                 position:  3, })));
}

#[test]
fn error_messages_carry_positions() {
    assert_eq!(assert_failure("@").to_string(), "Error at 0: Invalid character '@'.");
    assert_eq!(assert_failure("1/(1-1)").to_string(), "Math error: Division by zero.");
}

#[test]
fn starting_parse_is_notified_first() {
    let mut values = ScriptedSource::default();
    let mut notifier = RecordingNotifier::new();

    let _ = evaluate("@", &mut values, &mut notifier);
    assert_eq!(notifier.messages, [("starting parse: @".to_string(), false)]);
}

#[test]
fn comparison_of_equivalent_expressions() {
    let verdict = compare("x+1", "1+x").unwrap();
    assert_eq!(verdict, Comparison::Equivalent(ComplexNumber::new(2.0, 1.0)));
    assert_eq!(verdict.to_string(), "The expressions are EQUIVALENT. Result: 2 + 1i");

    assert!(compare("(x+y)**2", "x*x + 2*x*y + y*y").unwrap()
                                                     .is_equivalent());
    assert!(compare("conjugate(conjugate(z))", "z").unwrap()
                                                   .is_equivalent());
}

#[test]
fn comparison_of_different_expressions() {
    let verdict = compare("x*2", "x+2").unwrap();
    assert_eq!(verdict,
               Comparison::Different(ComplexNumber::new(2.0, 2.0), ComplexNumber::new(3.0, 1.0)));
    assert_eq!(verdict.to_string(),
               "The expressions are DIFFERENT. (2 + 2i vs 3 + 1i)");
}

#[test]
fn comparison_is_idempotent() {
    let first = compare("x*y - conjugate(x)", "root(y)").unwrap();
    let second = compare("x*y - conjugate(x)", "root(y)").unwrap();
    assert_eq!(first, second);
}

#[test]
fn comparison_reports_errors() {
    assert!(matches!(compare("x+", "x"), Err(Error::Parse(_))));
    assert!(matches!(compare("x", "1/(x-x)"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero))));
}

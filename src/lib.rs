//! # cplx
//!
//! cplx evaluates arithmetic expressions over complex numbers. Free variables
//! are resolved on demand: the first time a variable is needed, its value is
//! requested from a caller-supplied [`ValueSource`] and evaluated as an
//! expression of its own. Two expressions can also be checked for
//! equivalence by evaluating both with every variable set to `1 + 1i`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse as parse_tokens},
};

pub use crate::interpreter::{
    evaluator::{
        comparison::Comparison,
        core::{Notifier, ValueSource},
    },
    value::complex::ComplexNumber,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and function types
/// that represent an expression as a tree. The AST is built by the parser,
/// walked by the evaluator and drawn by [`render`].
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, including the failures of interactive
/// variable input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions to lexing and parsing errors.
/// - Wraps failures of typed-in variable values with the variable name.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, evaluation and the value type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   type.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Text rendering of expression trees.
pub mod render;

/// Tokenizes and parses an expression without evaluating it.
///
/// # Example
/// ```
/// use cplx::{ast::Expr, parse};
///
/// let expr = parse("x").unwrap();
/// assert_eq!(expr, Expr::Variable { name: "x".to_string() });
///
/// assert!(parse("(2+3").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let expr = parse_tokens(&tokens)?;
    log::debug!("parsed {source:?} as {expr}");
    Ok(expr)
}

/// Parses and evaluates an expression in a fresh session.
///
/// A "starting parse" message is sent to `notifier` first. Every variable
/// the expression needs is requested from `values` once; each new binding
/// is reported to `notifier`. The session's variables are discarded when
/// the call returns.
///
/// # Returns
/// The value of the expression together with its syntax tree.
///
/// # Examples
/// ```
/// use cplx::{
///     ComplexNumber, evaluate,
///     interpreter::evaluator::scripted::{RecordingNotifier, ScriptedSource},
/// };
///
/// let mut values = ScriptedSource::new(["1 + 2i"]);
/// let mut notifier = RecordingNotifier::new();
///
/// let (value, _) = evaluate("x * x + x", &mut values, &mut notifier).unwrap();
/// assert_eq!(value, ComplexNumber::new(-2.0, 6.0));
/// // `x` was asked for only once.
/// assert_eq!(values.requested(), ["x"]);
///
/// // An intentional error: division by zero.
/// assert!(evaluate("1/(1-1)", &mut values, &mut notifier).is_err());
/// ```
pub fn evaluate(source: &str,
                values: &mut dyn ValueSource,
                notifier: &mut dyn Notifier)
                -> Result<(ComplexNumber, Expr), Error> {
    notifier.notify(&format!("starting parse: {source}"), false);

    let expr = parse(source)?;
    let mut context = Context::interactive(values, notifier);
    let value = context.eval(&expr)?;

    log::debug!("evaluated {source:?} to {value} with {} variable(s) bound",
                context.variables().len());
    Ok((value, expr))
}

/// Checks whether two expressions are equivalent.
///
/// Both expressions are parsed, left first, and then evaluated with every
/// variable set to `1 + 1i`. No value source is consulted and nothing is
/// stored, so repeated calls always give the same answer.
///
/// # Examples
/// ```
/// use cplx::{Comparison, ComplexNumber, compare};
///
/// assert!(compare("x+1", "1+x").unwrap().is_equivalent());
/// assert_eq!(compare("x*2", "x+2").unwrap(),
///            Comparison::Different(ComplexNumber::new(2.0, 2.0),
///                                  ComplexNumber::new(3.0, 1.0)));
/// ```
pub fn compare(left: &str, right: &str) -> Result<Comparison, Error> {
    let left_expr = parse(left)?;
    let right_expr = parse(right)?;

    let left_value = Context::comparison().eval(&left_expr)?;
    let right_value = Context::comparison().eval(&right_expr)?;

    Ok(Comparison::of(left_value, right_value))
}

use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Function},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, nest, parse_expression},
        value::complex::{ComplexNumber, ZERO},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (negation, desugared to `0 - operand`)
/// - `+`  (no-op)
///
/// Prefix operators nest, so `--x` is parsed as `0 - (0 - x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting level; each sign adds one.
///
/// # Returns
/// The operand, wrapped in a subtraction from zero for every `-`.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Minus, position)) => {
            let depth = nest(depth, *position)?;
            tokens.next();
            let operand = parse_unary(tokens, depth)?;
            Ok(Expr::BinaryOp { left:  Box::new(Expr::Literal { value: ZERO }),
                                op:    BinaryOperator::Sub,
                                right: Box::new(operand), })
        },
        Some((Token::Plus, position)) => {
            let depth = nest(depth, *position)?;
            tokens.next();
            parse_unary(tokens, depth)
        },
        _ => parse_primary(tokens, depth),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - real and imaginary literals
/// - variables
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := REAL | IMAGINARY | IDENTIFIER
///              | FUNCTION "(" expression ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting level.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedEndOfInput` if there are no tokens left.
/// - `UnexpectedToken` for an operator or `)` where an operand belongs.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (tok, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match tok {
        Token::Real(n) => Ok(Expr::Literal { value: ComplexNumber::new(*n, 0.0) }),
        Token::Imaginary(n) => Ok(Expr::Literal { value: ComplexNumber::new(0.0, *n) }),
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone() }),
        Token::Function(function) => parse_function_call(tokens, *function, depth),
        Token::LParen => parse_grouping(tokens, *position, depth),
        tok => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                 position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `open`: Position of the opening parenthesis, for error reporting.
/// - `depth`: Nesting level outside the parentheses.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, nest(depth, open)?)?;
    expect_closing_paren(tokens, open)?;
    Ok(expr)
}

/// Parses the argument of a built-in function call.
///
/// The function name has already been consumed. Both parentheses are
/// required: a missing `(` is an unexpected token, a missing `)` is an
/// unmatched parenthesis.
///
/// Grammar `call := FUNCTION "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the function name.
/// - `function`: The function being called.
/// - `depth`: Nesting level of the call.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              function: Function,
                              depth: usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let open = match tokens.next() {
        Some((Token::LParen, position)) => *position,
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    format!("{tok} (expected '(' after {function})"),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let argument = parse_expression(tokens, nest(depth, open)?)?;
    expect_closing_paren(tokens, open)?;

    Ok(Expr::FunctionCall { function,
                            argument: Box::new(argument) })
}

/// Consumes the `)` matching the parenthesis opened at `open`.
fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(())
        },
        _ => Err(ParseError::UnmatchedParenthesis { position: open }),
    }
}

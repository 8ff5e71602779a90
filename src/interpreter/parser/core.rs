use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deep an expression tree may grow while it is parsed.
///
/// Every prefix sign, `**`, parenthesis, function call and chained `+ - * /`
/// adds one level.
pub const MAX_NESTING: usize = 256;

/// Enters one more level of nesting for the token at `position`.
///
/// # Errors
/// [`ParseError::NestingTooDeep`] once [`MAX_NESTING`] is reached.
pub(crate) const fn nest(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Parses a complete token sequence into a single expression.
///
/// Every token must be consumed; anything left over after the outermost
/// expression is reported as [`ParseError::UnexpectedTrailingTokens`].
///
/// # Parameters
/// - `tokens`: Tokens paired with their positions, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Example
/// ```
/// use cplx::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("2)").unwrap();
/// assert!(matches!(parse(&tokens),
///                  Err(ParseError::UnexpectedTrailingTokens { position: 1, .. })));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((tok, position)) => Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                                            position: *position, }),
        None => Ok(expr),
    }
}

/// Parses a full expression.
///
/// This is the entry point for recursive descent. It begins at the
/// lowest-precedence level, addition and subtraction, and descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting level of the expression within the whole input.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

use logos::Logos;

use crate::{ast::Function, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9][0-9.]*", parse_real)]
    Real(f64),
    /// Imaginary literal tokens, such as `2i`, `0.5i` or the bare unit `i`.
    #[regex(r"[0-9][0-9.]*i", parse_imaginary)]
    #[token("i", |_| 1.0, priority = 3)]
    Imaginary(f64),
    /// Reserved function names, `conjugate` and `root`.
    #[token("conjugate", function_name)]
    #[token("root", function_name)]
    Function(Function),
    /// Variable names such as `x` or `alpha2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(n) => write!(f, "{n}"),
            Self::Imaginary(n) => write!(f, "{n}i"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
        }
    }
}

/// Reads the longest prefix of a digit-and-dot run that forms a number.
///
/// A run such as `1.2.3` is read as `1.2`; everything from the second `.`
/// onwards is ignored.
fn leading_float(digits: &str) -> Option<f64> {
    let end = digits.match_indices('.')
                    .nth(1)
                    .map_or(digits.len(), |(idx, _)| idx);
    digits[..end].parse().ok()
}

/// Parses a real literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice does not start with a valid number.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    leading_float(lex.slice())
}

/// Maps a reserved name to the function it calls.
fn function_name(lex: &logos::Lexer<Token>) -> Option<Function> {
    Function::from_name(lex.slice())
}

/// Parses an imaginary literal such as `2.5i`, dropping the unit suffix.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().strip_suffix('i').and_then(leading_float)
}

/// Splits an expression into tokens.
///
/// All whitespace is removed before scanning, so `2 i` reads like `2i`.
/// Each token is paired with its byte offset in the stripped text.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character that
/// does not start a token.
///
/// # Example
/// ```
/// use cplx::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("3+2i").unwrap()
///                                          .into_iter()
///                                          .map(|(tok, _)| tok)
///                                          .collect();
/// assert_eq!(tokens, [Token::Real(3.0), Token::Plus, Token::Imaginary(2.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&stripped);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character, position });
        }
    }

    log::trace!("tokenized {stripped:?} into {} tokens", tokens.len());
    Ok(tokens)
}

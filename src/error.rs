/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: invalid characters, unexpected tokens, unbalanced parentheses
/// and leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division by
/// zero and the failures of the interactive variable-value protocol.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure of a top-level `evaluate` or `compare` call.
pub enum Error {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns `true` if the failure happened while tokenizing.
    ///
    /// # Example
    /// ```
    /// use cplx::error::{Error, ParseError};
    ///
    /// let e = Error::from(ParseError::InvalidCharacter { character: '@',
    ///                                                    position:  0, });
    /// assert!(e.is_lexical());
    /// assert!(!Error::from(ParseError::UnexpectedEndOfInput).is_lexical());
    /// ```
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Parse(ParseError::InvalidCharacter { .. }))
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => std::error::Error::source(e),
            Self::Runtime(e) => std::error::Error::source(e),
        }
    }
}

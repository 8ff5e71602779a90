#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression after whitespace has been
/// removed.
pub enum ParseError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// Found a token that cannot appear at this point of an expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A parenthesis was opened but never closed.
    UnmatchedParenthesis {
        /// Where the opening parenthesis is.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the extra token starts.
        position: usize,
    },
    /// The expression nests deeper than the parser allows.
    NestingTooDeep {
        /// The token that would have gone one level too deep.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at {position}: Invalid character '{character}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of expression."),

            Self::UnmatchedParenthesis { position } => write!(f,
                                                              "Error at {position}: Parenthesis opened here is never closed."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at {position}: Incomplete expression, extra tokens starting at: {token}"),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

use crate::error::Error;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by a number whose squared magnitude is zero.
    DivisionByZero,
    /// The value source was cancelled while a variable value was requested.
    InputCancelled {
        /// The name of the variable being requested.
        name: String,
    },
    /// The value source answered with blank text.
    InputEmpty {
        /// The name of the variable being requested.
        name: String,
    },
    /// The text typed in for a variable failed to parse or evaluate.
    InputInvalid {
        /// The name of the variable being requested.
        name:   String,
        /// Why the typed-in value was rejected.
        source: Box<Error>,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Math error: Division by zero."),
            Self::InputCancelled { name } => {
                write!(f, "Evaluation cancelled while asking for '{name}'.")
            },
            Self::InputEmpty { name } => write!(f, "Empty value for variable '{name}'."),
            Self::InputInvalid { name, source } => {
                write!(f, "Invalid value typed for '{name}': {source}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputInvalid { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

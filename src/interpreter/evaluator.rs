/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the per-session variable store, the
/// resolution modes and the traits through which the caller supplies variable
/// values and receives progress messages.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements addition, subtraction, multiplication, checked division and the
/// real-exponent power.
pub mod binary;

/// Function evaluation.
///
/// Handles calls to the built-in `conjugate` and `root` functions.
pub mod function;

/// Variable resolution.
///
/// Implements the lookup-or-ask protocol, including evaluation of the text
/// typed in for a variable.
pub mod variable;

/// Equivalence checks.
///
/// Classifies the results of two expressions evaluated in comparison mode.
pub mod comparison;

/// Scripted value sources and recording notifiers.
///
/// Deterministic stand-ins for an interactive user, used by tests and
/// non-interactive callers.
pub mod scripted;

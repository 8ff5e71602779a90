/// Parser entry points.
///
/// Contains the top-level `parse` function, which requires every token to be
/// consumed, and `parse_expression`, the start of the precedence hierarchy.
pub mod core;

/// Binary operator parsing.
///
/// Implements one function per precedence level: additive, multiplicative and
/// exponent. Additive and multiplicative levels are left-associative; the
/// exponent level is right-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, variables, function calls and
/// parenthesised groups.
pub mod unary;

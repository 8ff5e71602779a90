/// The evaluator module walks AST nodes and computes results.
///
/// The evaluator traverses the AST, performs complex arithmetic, resolves
/// variables through the session store or the injected value source, and
/// reports division by zero and failed variable input.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the per-session variable store and the resolution mode.
/// - Classifies results of the equivalence check.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the whitespace-stripped expression and produces a stream of
/// tokens: real and imaginary literals, variable names, function names,
/// operators and parentheses.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their positions.
/// - Reads numeric literals, including the imaginary suffix `i`.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST by recursive descent, one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Applies precedence and associativity.
/// - Reports unexpected tokens, unbalanced parentheses and leftover input.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// # Responsibilities
/// - Defines `ComplexNumber` and its arithmetic.
/// - Renders results the way they are shown to users.
pub mod value;

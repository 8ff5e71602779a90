use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::complex::ComplexNumber,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The value every variable takes in comparison mode.
pub const SENTINEL: ComplexNumber = ComplexNumber::new(1.0, 1.0);

/// Supplies text for variables that are not bound yet.
///
/// Implemented by the caller: a terminal prompt, a GUI dialog, or a scripted
/// list of answers in tests. Closures of type `FnMut(&str) -> Option<String>`
/// implement it directly.
pub trait ValueSource {
    /// Asks for the value of `name`.
    ///
    /// Returns `None` when the user cancels the request.
    fn request_value(&mut self, name: &str) -> Option<String>;
}

impl<F> ValueSource for F where F: FnMut(&str) -> Option<String>
{
    fn request_value(&mut self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Receives progress messages emitted during evaluation.
///
/// Closures of type `FnMut(&str, bool)` implement it directly.
pub trait Notifier {
    /// Reports `message`; `is_error` marks messages meant to be highlighted.
    fn notify(&mut self, message: &str, is_error: bool);
}

impl<F> Notifier for F where F: FnMut(&str, bool)
{
    fn notify(&mut self, message: &str, is_error: bool) {
        self(message, is_error);
    }
}

/// Values bound to variable names during one evaluation session.
///
/// A store starts empty and is filled lazily, one entry per variable the
/// first time it is resolved.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VariableStore {
    table: HashMap<String, ComplexNumber>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ComplexNumber> {
        self.table.get(name).copied()
    }

    /// Binds `value` to `name`, replacing any previous binding.
    pub fn insert(&mut self, name: &str, value: ComplexNumber) {
        self.table.insert(name.to_string(), value);
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// How variables are resolved.
pub enum Mode<'io> {
    /// Every variable is the [`SENTINEL`]; the store and the value source are
    /// never touched.
    Comparison,
    /// Unbound variables are requested from `source`; new bindings are
    /// reported to `notifier`.
    Interactive {
        /// Where values for unbound variables come from.
        source:   &'io mut dyn ValueSource,
        /// Where "variable bound" messages go.
        notifier: &'io mut dyn Notifier,
    },
}

/// Stores the runtime evaluation context of one session.
///
/// ## Usage
///
/// A `Context` is created per top-level evaluation and dropped with it, so
/// independent evaluations never share variables.
///
/// ```
/// use cplx::{
///     interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
///     parse,
/// };
///
/// let expr = parse("x * 2").unwrap();
/// let mut ctx = Context::comparison();
/// assert_eq!(ctx.eval(&expr).unwrap(), ComplexNumber::new(2.0, 2.0));
/// ```
pub struct Context<'io> {
    /// Variables bound so far in this session.
    pub(crate) variables: VariableStore,
    /// How unbound variables are resolved.
    pub(crate) mode:      Mode<'io>,
}

impl<'io> Context<'io> {
    /// Creates a context that asks `source` for unknown variables and reports
    /// each new binding to `notifier`.
    #[must_use]
    pub fn interactive(source: &'io mut dyn ValueSource, notifier: &'io mut dyn Notifier) -> Self {
        Self { variables: VariableStore::new(),
               mode:      Mode::Interactive { source, notifier }, }
    }

    /// Creates a comparison-mode context, in which every variable evaluates to
    /// [`SENTINEL`].
    #[must_use]
    pub fn comparison() -> Self {
        Self { variables: VariableStore::new(),
               mode:      Mode::Comparison, }
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated left to right, so variables are requested in the order they
    /// appear in the source text.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Errors
    /// - `DivisionByZero` when a divisor has zero magnitude.
    /// - `InputCancelled`, `InputEmpty` or `InputInvalid` when resolving a
    ///   variable fails.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<ComplexNumber> {
        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { function, argument } => {
                self.eval_function_call(*function, argument)
            },
        }
    }
}

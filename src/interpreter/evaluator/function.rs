use crate::{
    ast::{Expr, Function},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::complex::ComplexNumber,
    },
};

impl Context<'_> {
    /// Evaluates the argument of a built-in function call and applies the
    /// function to it.
    pub(crate) fn eval_function_call(&mut self,
                                     function: Function,
                                     argument: &Expr)
                                     -> EvalResult<ComplexNumber> {
        let value = self.eval(argument)?;
        Ok(apply_function(function, value))
    }
}

/// Applies a built-in function to an evaluated argument.
///
/// # Example
/// ```
/// use cplx::{
///     ast::Function,
///     interpreter::{evaluator::function::apply_function, value::complex::ComplexNumber},
/// };
///
/// let z = ComplexNumber::new(3.0, -4.0);
/// assert_eq!(apply_function(Function::Conjugate, z), ComplexNumber::new(3.0, 4.0));
///
/// let root = apply_function(Function::Root, ComplexNumber::new(9.0, 0.0));
/// assert!((root.real - 3.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn apply_function(function: Function, value: ComplexNumber) -> ComplexNumber {
    match function {
        Function::Conjugate => value.conj(),
        Function::Root => value.sqrt(),
    }
}

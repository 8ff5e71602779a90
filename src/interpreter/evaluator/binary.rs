use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::complex::ComplexNumber,
    },
};

impl Context<'_> {
    /// Evaluates both operands of a binary operation, left first, and
    /// combines them.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<ComplexNumber> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, left, right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// `**` uses only the real part of the exponent: `z ** (a + bi)` is
    /// computed as `z ** a`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<ComplexNumber>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use cplx::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
    /// };
    ///
    /// let left = ComplexNumber::new(0.0, 2.0);
    /// let right = ComplexNumber::new(0.0, 3.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul, left, right);
    /// assert_eq!(result.unwrap(), ComplexNumber::new(-6.0, 0.0));
    ///
    /// let squared = Context::eval_binary(BinaryOperator::Pow,
    ///                                    ComplexNumber::new(3.0, 0.0),
    ///                                    ComplexNumber::new(2.0, 7.0));
    /// assert_eq!(squared.unwrap(), ComplexNumber::new(9.0, 0.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: ComplexNumber,
                       right: ComplexNumber)
                       -> EvalResult<ComplexNumber> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => left.checked_div(right),
            BinaryOperator::Pow => Ok(left.powf(right.real)),
        }
    }
}

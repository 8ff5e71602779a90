use crate::interpreter::value::complex::ComplexNumber;

/// Largest `|Δre| + |Δim|` at which two results count as equal.
pub const EQUIVALENCE_TOLERANCE: f64 = 0.001;

/// Outcome of comparing two expressions under the sentinel substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Both expressions produced the same value, which is carried here.
    Equivalent(ComplexNumber),
    /// The expressions produced these two different values, left first.
    Different(ComplexNumber, ComplexNumber),
}

impl Comparison {
    /// Classifies two evaluated results.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::{
    ///     evaluator::comparison::Comparison,
    ///     value::complex::ComplexNumber,
    /// };
    ///
    /// let a = ComplexNumber::new(2.0, 1.0);
    /// let b = ComplexNumber::new(2.0005, 1.0);
    /// assert_eq!(Comparison::of(a, b), Comparison::Equivalent(a));
    ///
    /// let c = ComplexNumber::new(3.0, 1.0);
    /// assert_eq!(Comparison::of(a, c), Comparison::Different(a, c));
    /// ```
    #[must_use]
    pub fn of(left: ComplexNumber, right: ComplexNumber) -> Self {
        if left.distance(right) < EQUIVALENCE_TOLERANCE {
            Self::Equivalent(left)
        } else {
            Self::Different(left, right)
        }
    }

    /// Returns `true` for [`Comparison::Equivalent`].
    #[must_use]
    pub const fn is_equivalent(&self) -> bool {
        matches!(self, Self::Equivalent(_))
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equivalent(value) => write!(f, "The expressions are EQUIVALENT. Result: {value}"),
            Self::Different(left, right) => {
                write!(f, "The expressions are DIFFERENT. ({left} vs {right})")
            },
        }
    }
}

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);

/// Number of decimal places kept when a complex number is rendered.
const DISPLAY_SCALE: f64 = 10_000.0;

/// Represents a complex number with real and imaginary parts.
///
/// Every operation returns a fresh value. A `NaN` component produced by an
/// operation is replaced by `0.0`; infinities are kept as they are.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

/// Rounds to four decimal places, sending halves towards positive infinity.
fn round_for_display(value: f64) -> f64 {
    // `+ 0.0` folds a negative zero into a positive one.
    (value * DISPLAY_SCALE + 0.5).floor() / DISPLAY_SCALE + 0.0
}

impl Display for ComplexNumber {
    /// Renders the number as `"<re> <+|-> <|im|>i"`.
    ///
    /// Both parts are rounded to four decimals. The sign is taken from the
    /// unrounded imaginary part.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!(ComplexNumber::new(5.0, 0.0).to_string(), "5 + 0i");
    /// assert_eq!(ComplexNumber::new(1.0, -2.5).to_string(), "1 - 2.5i");
    /// assert_eq!(ComplexNumber::new(0.123_456, 1.0 / 3.0).to_string(),
    ///            "0.1235 + 0.3333i");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.imaginary >= 0.0 { '+' } else { '-' };
        let real = round_for_display(self.real);
        let imaginary = round_for_display(self.imaginary.abs());
        write!(f, "{real} {sign} {imaginary}i")
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Builds the result of an arithmetic operation, replacing `NaN` parts
    /// with zero.
    const fn normalized(real: f64, imaginary: f64) -> Self {
        Self { real:      if real.is_nan() { 0.0 } else { real },
               imaginary: if imaginary.is_nan() { 0.0 } else { imaginary }, }
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.0, 5.0);
    /// assert_eq!(c.conj(), ComplexNumber::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Divides `self` by `rhs`.
    ///
    /// Fails when the squared magnitude of `rhs` is exactly zero.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::{ComplexNumber, ZERO};
    ///
    /// let q = ComplexNumber::new(1.0, 1.0).checked_div(ComplexNumber::new(0.0, 1.0))
    ///                                     .unwrap();
    /// assert_eq!(q, ComplexNumber::new(1.0, -1.0));
    ///
    /// assert!(ComplexNumber::new(1.0, 0.0).checked_div(ZERO).is_err());
    /// ```
    #[allow(clippy::suboptimal_flops)]
    pub fn checked_div(self, rhs: Self) -> EvalResult<Self> {
        // No fused multiply-add: cancelling cross terms must give exactly zero.
        let denom = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        if denom == 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let real = self.real * rhs.real + self.imaginary * rhs.imaginary;
        let imaginary = self.imaginary * rhs.real - self.real * rhs.imaginary;
        Ok(Self::normalized(real / denom, imaginary / denom))
    }

    /// Raises the complex number to a real power through its polar form.
    ///
    /// Only a real exponent is supported; callers holding a complex exponent
    /// pass its real part.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(4.0, 0.0);
    /// let res = c.powf(0.5);
    /// assert!((res.real - 2.0).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        let r = self.abs();
        let theta = self.arg();

        let new_r = r.powf(exp);
        let new_theta = theta * exp;

        Self::normalized(new_r * new_theta.cos(), new_r * new_theta.sin())
    }

    /// Returns the principal square root, computed as `self.powf(0.5)`.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let s = ComplexNumber::new(-1.0, 0.0).sqrt();
    /// assert!(s.real.abs() < 1e-10);
    /// assert!((s.imaginary - 1.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.powf(0.5)
    }

    /// Returns `|Δre| + |Δim|` between two numbers.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let a = ComplexNumber::new(2.0, 2.0);
    /// let b = ComplexNumber::new(3.0, 1.0);
    /// assert_eq!(a.distance(b), 2.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.real - other.real).abs() + (self.imaginary - other.imaginary).abs()
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::normalized(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::normalized(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    #[allow(clippy::suboptimal_flops)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::normalized(self.real * rhs.real - self.imaginary * rhs.imaginary,
                         self.real * rhs.imaginary + self.imaginary * rhs.real)
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}

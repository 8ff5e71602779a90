/// Complex number support.
///
/// Defines the `ComplexNumber` type every expression evaluates to. Includes
/// the arithmetic operations, conjugate, polar power and root, and the
/// four-decimal rendering used for results and notifications.
pub mod complex;

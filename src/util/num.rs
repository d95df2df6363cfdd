use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, operator::Operator},
};

/// `2^53`: from this magnitude on, not every integer is representable in an
/// `f64`.
pub const SAFE_INTEGER_BOUNDARY: f64 = 9_007_199_254_740_992.0;
/// Largest integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
/// Results closer than this to an integer are reported as that integer.
pub const INTEGER_SNAP_TOLERANCE: f64 = 1e-10;
/// Operands of integer-only operators may be this far off an integer.
pub const INTEGER_OPERAND_TOLERANCE: f64 = 1e-9;

/// Rejects values whose magnitude reaches [`SAFE_INTEGER_BOUNDARY`].
///
/// `NaN` has no magnitude and passes through unchanged.
///
/// ## Errors
/// Returns `RuntimeError::OutOfRange` carrying the value when it is too large
/// or too small.
///
/// ## Example
/// ```
/// use tally::{
///     error::RuntimeError,
///     util::num::{MAX_SAFE_INTEGER, SAFE_INTEGER_BOUNDARY, check_safe_range},
/// };
///
/// assert_eq!(check_safe_range(MAX_SAFE_INTEGER).unwrap(), MAX_SAFE_INTEGER);
/// assert!(matches!(check_safe_range(-SAFE_INTEGER_BOUNDARY),
///                  Err(RuntimeError::OutOfRange { .. })));
/// ```
pub fn check_safe_range(value: f64) -> EvalResult<f64> {
    if value.abs() >= SAFE_INTEGER_BOUNDARY {
        return Err(RuntimeError::OutOfRange { value });
    }
    Ok(value)
}

/// Replaces values within [`INTEGER_SNAP_TOLERANCE`] of an integer by that
/// integer, so accumulated rounding noise such as `1.99999999999` is shown as
/// `2`. Negative zero becomes zero.
///
/// ## Example
/// ```
/// use tally::util::num::snap_to_integer;
///
/// assert_eq!(snap_to_integer(1.999_999_999_99), 2.0);
/// assert_eq!(snap_to_integer(-2.000_000_000_01), -2.0);
/// assert_eq!(snap_to_integer(1.999_999_999_9), 1.999_999_999_9);
/// ```
#[must_use]
pub fn snap_to_integer(value: f64) -> f64 {
    let rounded = value.round();
    let snapped = if (rounded - value).abs() < INTEGER_SNAP_TOLERANCE {
        rounded
    } else {
        value
    };

    if snapped == 0.0 { 0.0 } else { snapped }
}

/// Converts an operand of an integer-only operator to `i64`.
///
/// The operand must lie within [`INTEGER_OPERAND_TOLERANCE`] of an integer and,
/// like every evaluated value, inside the safe range.
///
/// ## Errors
/// Returns `RuntimeError::InvalidOperand` naming the operator and the value when
/// the operand is fractional or not finite, and `RuntimeError::OutOfRange` when
/// it is too large to convert exactly.
///
/// ## Example
/// ```
/// use tally::{interpreter::operator::Operator, util::num::f64_to_integer_operand};
///
/// assert_eq!(f64_to_integer_operand(4.000_000_000_1, Operator::Modulo).unwrap(), 4);
/// assert!(f64_to_integer_operand(5.5, Operator::Modulo).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_integer_operand(value: f64, operator: Operator) -> EvalResult<i64> {
    let rounded = value.round();
    if !value.is_finite() || (value - rounded).abs() > INTEGER_OPERAND_TOLERANCE {
        return Err(RuntimeError::InvalidOperand { operator, value });
    }
    Ok(check_safe_range(rounded)? as i64)
}

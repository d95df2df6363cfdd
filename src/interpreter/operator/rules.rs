use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, operator::Operator},
    util::num::f64_to_integer_operand,
};

/// Matches an operator whose literal is its single leading byte.
#[must_use]
pub const fn lex_single(_input: &str, cursor: usize) -> Option<usize> {
    Some(cursor + 1)
}

/// Matches `**`, which shares its leading byte with `*`.
#[must_use]
pub fn lex_power(input: &str, cursor: usize) -> Option<usize> {
    (input.as_bytes().get(cursor + 1) == Some(&b'*')).then_some(cursor + 2)
}

/// Sum of both operands.
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

/// Left operand minus right operand.
pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

/// Product of both operands.
pub fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

/// Fails on an exactly zero divisor.
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(left / right)
}

/// Truncated integer remainder of two near-integer operands.
#[allow(clippy::cast_precision_loss)]
pub fn modulo(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    let dividend = f64_to_integer_operand(left, Operator::Modulo)?;
    let divisor = f64_to_integer_operand(right, Operator::Modulo)?;

    dividend.checked_rem(divisor)
            .map(|remainder| remainder as f64)
            .ok_or(RuntimeError::DivisionByZero)
}

/// Real power; undefined results such as `(-8) ** (1/3)` are `NaN`.
pub fn power(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left.powf(right))
}

/// Rule of the grouping and assignment pseudo-operators. The evaluator refuses
/// to apply non-arithmetic operators, so this is never reached through it.
pub fn unevaluated(_left: f64, _right: f64) -> EvalResult<f64> {
    Ok(0.0)
}

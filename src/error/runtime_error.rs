use thiserror::Error;

use crate::interpreter::operator::Operator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division (or remainder) by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operand is not acceptable for the operator, e.g. a fraction for `%`.
    #[error("Operator '{operator}' requires integer operands, got {value}.")]
    InvalidOperand {
        /// The operator being applied.
        operator: Operator,
        /// The rejected operand.
        value:    f64,
    },
    /// A value reached `2^53` in magnitude and can no longer be trusted.
    #[error("Number {value} is too large or too small to be represented without losing precision.")]
    OutOfRange {
        /// The offending value.
        value: f64,
    },
    /// A grouping or assignment operator ended up inside an arithmetic
    /// expression.
    #[error("Operator '{operator}' cannot be evaluated here.")]
    NotEvaluable {
        /// The pseudo-operator.
        operator: Operator,
    },
}

use std::collections::HashMap;

use tracing::trace;

use crate::{ast::Expr, error::RuntimeError, util::num::check_safe_range};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variable environment.
///
/// Maps each variable name to the value it was last assigned. A `Context` lives
/// as long as its session; values are never written to storage.
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a context with no variables bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Iterates over all bindings in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Evaluates an expression tree against the variables of this context.
    ///
    /// Both operands of an operation are evaluated, left first, before the
    /// operator is applied. A pseudo-operator is rejected before its operands
    /// are looked at. Every value produced along the way, leaves
    /// included, must stay below `2^53` in magnitude.
    ///
    /// Assignment is not handled here: the session intercepts `=` at the root
    /// of a statement, and `=`, `(` or `)` found anywhere else are rejected.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a name that was never assigned.
    /// - `DivisionByZero`, `InvalidOperand` from the operator rules.
    /// - `OutOfRange` when any intermediate value reaches `2^53`.
    /// - `NotEvaluable` for a pseudo-operator inside the tree.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     interpreter::{evaluator::Context, lexer::tokenize, parser::parse},
    ///     error::RuntimeError,
    /// };
    ///
    /// let mut context = Context::new();
    /// context.set_variable("y", 12.0);
    ///
    /// let expr = parse(&tokenize("(-y) + 2").unwrap()).unwrap().unwrap();
    /// assert_eq!(context.eval(&expr).unwrap(), -10.0);
    ///
    /// let expr = parse(&tokenize("z * 2").unwrap()).unwrap().unwrap();
    /// assert!(matches!(context.eval(&expr),
    ///                  Err(RuntimeError::UndefinedVariable { .. })));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::Number(value) => *value,
            Expr::Variable(name) => self.eval_variable(name)?,
            Expr::Operation { op, .. } if !op.is_arithmetic() => {
                return Err(RuntimeError::NotEvaluable { operator: *op });
            },
            Expr::Operation { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                let value = op.apply(left, right)?;
                trace!(%op, left, right, value, "applied");
                value
            },
        };

        check_safe_range(value)
    }

    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}

use std::fmt;

use crate::interpreter::{evaluator::EvalResult, operator::rules};

/// Left and right binding power of an infix operator.
///
/// The two powers always differ: a right power above the left one makes chains
/// of the operator fold to the left, a smaller right power makes them fold to
/// the right.
pub type BindingPower = (f32, f32);

/// Custom lexing rule of an operator.
///
/// Receives the whitespace-free input and the cursor at the operator's first
/// byte. Returns the cursor just past the operator, or `None` if the operator
/// does not match there.
pub type LexRule = fn(&str, usize) -> Option<usize>;

/// Evaluation rule of an operator, applied to exactly two operands.
pub type ApplyRule = fn(f64, f64) -> EvalResult<f64>;

/// Every operator the calculator understands.
///
/// The discriminant of each variant is its index in [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `**`
    Power,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Static description of one operator.
#[derive(Debug)]
pub struct OperatorDef {
    /// The operator this entry describes.
    pub operator:   Operator,
    /// Source text of the operator.
    pub literal:    &'static str,
    /// `false` for the grouping and assignment pseudo-operators.
    pub arithmetic: bool,
    /// Binding powers when used between two operands.
    pub infix:      Option<BindingPower>,
    /// Binding power of the operand when used in front of it.
    pub prefix:     Option<f32>,
    /// How the literal is recognised in the input.
    pub lex:        LexRule,
    /// How two operands are combined.
    pub apply:      ApplyRule,
}

/// The operator table, in `Operator` discriminant order.
pub static OPERATORS: [OperatorDef; 9] =
    [OperatorDef { operator:   Operator::Assign,
                   literal:    "=",
                   arithmetic: false,
                   infix:      Some((0.2, 0.1)),
                   prefix:     None,
                   lex:        rules::lex_single,
                   apply:      rules::unevaluated, },
     OperatorDef { operator:   Operator::Add,
                   literal:    "+",
                   arithmetic: true,
                   infix:      Some((1.0, 1.1)),
                   prefix:     Some(3.0),
                   lex:        rules::lex_single,
                   apply:      rules::add, },
     OperatorDef { operator:   Operator::Subtract,
                   literal:    "-",
                   arithmetic: true,
                   infix:      Some((1.0, 1.1)),
                   prefix:     Some(3.0),
                   lex:        rules::lex_single,
                   apply:      rules::subtract, },
     OperatorDef { operator:   Operator::Multiply,
                   literal:    "*",
                   arithmetic: true,
                   infix:      Some((2.0, 2.1)),
                   prefix:     None,
                   lex:        rules::lex_single,
                   apply:      rules::multiply, },
     OperatorDef { operator:   Operator::Divide,
                   literal:    "/",
                   arithmetic: true,
                   infix:      Some((2.0, 2.1)),
                   prefix:     None,
                   lex:        rules::lex_single,
                   apply:      rules::divide, },
     OperatorDef { operator:   Operator::Modulo,
                   literal:    "%",
                   arithmetic: true,
                   infix:      Some((2.0, 2.1)),
                   prefix:     None,
                   lex:        rules::lex_single,
                   apply:      rules::modulo, },
     OperatorDef { operator:   Operator::Power,
                   literal:    "**",
                   arithmetic: true,
                   infix:      Some((4.0, 4.1)),
                   prefix:     None,
                   lex:        rules::lex_power,
                   apply:      rules::power, },
     OperatorDef { operator:   Operator::LeftParen,
                   literal:    "(",
                   arithmetic: false,
                   infix:      None,
                   prefix:     None,
                   lex:        rules::lex_single,
                   apply:      rules::unevaluated, },
     OperatorDef { operator:   Operator::RightParen,
                   literal:    ")",
                   arithmetic: false,
                   infix:      None,
                   prefix:     None,
                   lex:        rules::lex_single,
                   apply:      rules::unevaluated, }];

impl Operator {
    /// Returns the table entry of this operator.
    #[must_use]
    pub fn def(self) -> &'static OperatorDef {
        &OPERATORS[self as usize]
    }

    /// Returns the source text of the operator.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Power.literal(), "**");
    /// ```
    #[must_use]
    pub fn literal(self) -> &'static str {
        self.def().literal
    }

    /// `false` for `=`, `(` and `)`.
    #[must_use]
    pub fn is_arithmetic(self) -> bool {
        self.def().arithmetic
    }

    /// `true` for `(` and `)`.
    #[must_use]
    pub const fn is_grouping(self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }

    /// `true` if the operator can stand between two operands.
    #[must_use]
    pub fn is_infix(self) -> bool {
        self.def().infix.is_some()
    }

    /// `true` for `+` and `-`, which may also precede a single operand.
    #[must_use]
    pub fn is_prefix(self) -> bool {
        self.def().prefix.is_some()
    }

    /// Returns the `(left, right)` binding powers, or `None` for operators that
    /// cannot stand between two operands.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Assign.infix_binding_power(), Some((0.2, 0.1)));
    /// assert_eq!(Operator::LeftParen.infix_binding_power(), None);
    /// ```
    #[must_use]
    pub fn infix_binding_power(self) -> Option<BindingPower> {
        self.def().infix
    }

    /// Returns the minimum binding power the operand of a prefix use must
    /// satisfy, or `None` if the operator cannot be used as a prefix.
    #[must_use]
    pub fn prefix_binding_power(self) -> Option<f32> {
        self.def().prefix
    }

    /// Applies the operator's evaluation rule to two operands.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Modulo.apply(7.0, 4.0).unwrap(), 3.0);
    /// assert!(Operator::Divide.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        (self.def().apply)(left, right)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

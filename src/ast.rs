use std::fmt;

use crate::interpreter::operator::Operator;

/// A node of a parsed expression.
///
/// An `Operation` exclusively owns both of its operands, so an expression is
/// always a tree. Nodes are built bottom-up by the parser and never modified
/// afterwards. Unary `-x` and `+x` are represented as `0 - x` and `0 + x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Number(f64),
    /// Reference to a variable by name.
    Variable(String),
    /// An operator applied to two operands.
    Operation {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds an operation node from two operands.
    #[must_use]
    pub fn operation(op: Operator, left: Self, right: Self) -> Self {
        Self::Operation { op,
                          left: Box::new(left),
                          right: Box::new(right) }
    }

    /// Returns the name if this node is a bare variable.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the target and value if the root of this tree is `=`.
    #[must_use]
    pub fn as_assignment(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Operation { op: Operator::Assign,
                              left,
                              right, } => Some((left, right)),
            _ => None,
        }
    }

    /// Renders the tree as fully parenthesised infix source.
    ///
    /// Parsing the rendered text again yields an equal tree, which is not true
    /// of the prefix form produced by `Display`.
    ///
    /// ## Example
    /// ```
    /// use tally::interpreter::{lexer::tokenize, parser::parse};
    ///
    /// let expr = parse(&tokenize("-2 ** 3 + x").unwrap()).unwrap().unwrap();
    /// assert_eq!(expr.to_string(), "(+ (- 0 (** 2 3)) x)");
    /// assert_eq!(expr.infix().to_string(), "((0-(2**3))+x)");
    /// ```
    #[must_use]
    pub const fn infix(&self) -> Infix<'_> {
        Infix(self)
    }
}

/// Prefix (S-expression) rendering, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
            Self::Operation { op, left, right } => write!(f, "({op} {left} {right})"),
        }
    }
}

/// Infix rendering of an [`Expr`], returned by [`Expr::infix`].
#[derive(Debug, Clone, Copy)]
pub struct Infix<'a>(&'a Expr);

impl fmt::Display for Infix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Operation { op, left, right } => {
                write!(f, "({}{op}{})", left.infix(), right.infix())
            },
            atom => write!(f, "{atom}"),
        }
    }
}

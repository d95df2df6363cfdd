/// Operator kinds and their static definitions.
///
/// Declares the closed `Operator` enum and the table describing every operator:
/// literal, fixity, binding powers, lexing rule and evaluation rule.
pub mod core;
/// The operator registry.
///
/// Indexes the operator table by literal and by leading byte so the lexer can
/// find the longest operator starting at any position.
pub mod registry;
/// Lexing and evaluation rules referenced by the operator table.
pub mod rules;

pub use self::{
    core::{ApplyRule, BindingPower, LexRule, OPERATORS, Operator, OperatorDef},
    registry::OperatorRegistry,
};

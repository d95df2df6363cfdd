/// Numeric helpers.
///
/// This module holds the safe-integer boundary of `f64` and the small helpers
/// that enforce it, plus the tolerances used to decide when a float is "really"
/// an integer.
pub mod num;

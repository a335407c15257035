/// Numeric formatting helpers.
///
/// Reals are rendered in a form that keeps them distinguishable from
/// integers.
pub mod num;

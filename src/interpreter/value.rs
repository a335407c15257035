/// Numeric values.
///
/// Defines the `Number` type (integer or real) together with checked
/// arithmetic, integer-to-real promotion and output formatting.
pub mod number;

/// The `Value` type: a number or a piece of text.
pub mod core;

/// Core execution logic and context management.
///
/// Contains the runtime context, the instruction loop and the handling of
/// output and input statements.
pub mod core;

/// Expression evaluation.
///
/// Resolves operator precedence with an operand stack and an operator stack.
pub mod expression;

/// Function evaluation.
///
/// Call frames, the call stack, and the checks performed when a user
/// function is entered.
pub mod function;

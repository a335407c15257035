/// Core parsing logic.
///
/// Entry point for turning a token sequence into a program, and the
/// statement dispatcher that decides what each statement is from its first
/// one or two tokens.
pub mod core;

/// Statement parsing.
///
/// Assignments, output, input and call statements.
pub mod statement;

/// Function definitions.
///
/// Captures brace-delimited bodies and parses them into instructions at
/// definition time.
pub mod block;

/// Expression spans.
///
/// Validates a captured token span and turns it into an operand/operator
/// sequence.
pub mod expression;

/// Utility functions for the parser.
///
/// Shared helpers for identifiers, delimiters and comma-separated lists.
pub mod utils;

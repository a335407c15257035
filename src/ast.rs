use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A single operand of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A number or string literal.
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

/// A validated expression span.
///
/// An expression is a flat sequence `operand (operator operand)*` exactly as
/// it appeared in the source. No grouping is recorded; precedence is resolved
/// when the expression is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The leftmost operand.
    pub first: Operand,
    /// Every following operator paired with its right-hand operand, in source
    /// order. Each operator carries its own line.
    pub rest:  Vec<(BinaryOperator, usize, Operand)>,
    /// Line number of the first token.
    pub line:  usize,
}

/// A parsed statement.
///
/// Instructions are the units executed by the evaluator, one after the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `name -> expression`
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(expression)`
    Output {
        /// The expression to print.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// `input("prompt")`
    Input {
        /// Text written before waiting for a line.
        prompt: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// `name(argument, ...)`
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Expression>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Instruction {
    /// Returns the line of the instruction's first token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Assign { line, .. }
            | Self::Output { line, .. }
            | Self::Input { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function's name.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The instructions of the body, parsed when the function was defined.
    pub body:   Vec<Instruction>,
    /// Line number in the source code.
    pub line:   usize,
}

/// A fully parsed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level instructions in source order.
    pub instructions: Vec<Instruction>,
    /// Every function defined anywhere in the source, by name.
    pub functions:    HashMap<String, FunctionDef>,
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use arrowlang::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

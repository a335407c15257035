#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing instructions.
pub enum RuntimeError {
    /// An expression referenced a name that is not bound in the current
    /// environment.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never declared.
    FunctionNotFound {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand had a type the operator does not accept.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Too many nested function calls are active.
    CallDepthExceeded {
        /// The configured maximum depth.
        max:  usize,
        /// The source line of the call that exceeded the limit.
        line: usize,
    },
    /// The input channel has no more lines to read.
    InputClosed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to a channel failed.
    Io {
        /// Details reported by the channel.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::FunctionNotFound { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::TypeError { line, .. }
            | Self::Overflow { line }
            | Self::CallDepthExceeded { line, .. }
            | Self::InputClosed { line }
            | Self::Io { line, .. } => *line,
        }
    }

    /// Whether the error stems from an invalid numeric operation.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self,
                 Self::DivisionByZero { .. } | Self::TypeError { .. } | Self::Overflow { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::FunctionNotFound { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' expects {expected} argument(s) but received {found}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Numeric overflow while trying to compute result."),
            Self::CallDepthExceeded { max, line } => write!(f,
                                                            "Error on line {line}: Maximum call depth of {max} exceeded."),
            Self::InputClosed { line } => {
                write!(f, "Error on line {line}: Input ended while waiting for a line.")
            },
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

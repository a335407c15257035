#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while grouping tokens into
/// instructions.
pub enum SyntaxError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific construct was expected but something else was found.
    Expected {
        /// Human readable description of what was expected.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A closing delimiter was never found.
    MissingDelimiter {
        /// The delimiter that is missing, e.g. `)` or `}`.
        delimiter: char,
        /// The construct that opened the delimiter.
        construct: &'static str,
        /// The source line where the construct starts.
        line:      usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Human readable description of what was expected.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A reserved keyword without any meaning in the language was used.
    ReservedKeyword {
        /// The reserved keyword.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression span contained no tokens at all.
    EmptyExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call had an empty argument between commas or before `)`.
    EmptyArgument {
        /// Name of the called function.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression contained a token that has no evaluation rule.
    Unsupported {
        /// The token that cannot be evaluated.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl SyntaxError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::Expected { line, .. }
            | Self::MissingDelimiter { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::ReservedKeyword { line, .. }
            | Self::EmptyExpression { line }
            | Self::EmptyArgument { line, .. }
            | Self::Unsupported { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::Expected { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::MissingDelimiter { delimiter,
                                     construct,
                                     line, } => write!(f,
                                                       "Error on line {line}: Expected closing '{delimiter}' for {construct} but none found."),

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input, expected {expected}."),

            Self::ReservedKeyword { keyword, line } => write!(f,
                                                              "Error on line {line}: Keyword '{keyword}' is reserved and cannot be used here."),

            Self::EmptyExpression { line } => {
                write!(f, "Error on line {line}: Expected an expression.")
            },

            Self::EmptyArgument { function, line } => write!(f,
                                                             "Error on line {line}: Empty argument in call to '{function}'."),

            Self::Unsupported { token, line } => write!(f,
                                                        "Error on line {line}: {token} cannot be used inside an expression."),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Lexing errors.
///
/// Raised when the source text contains a character that starts no token, or
/// a numeric literal that does not fit the number types.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: unbound
/// names, unknown functions, arity mismatches, invalid arithmetic and channel
/// failures.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised when the token sequence does not match any statement grammar, a
/// delimiter is missing, or an expression contains tokens without an
/// evaluation rule.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error that aborts an interpreter run.
///
/// Every phase error converts into this type so the pipeline can use `?`
/// throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure while tokenizing.
    Lex(LexError),
    /// Failure while parsing.
    Syntax(SyntaxError),
    /// Failure while executing.
    Runtime(RuntimeError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or unrepresentable literal.
    Lex,
    /// Token sequence does not match the grammar.
    Syntax,
    /// Expression references an unbound name.
    UndefinedVariable,
    /// Call to an undeclared function.
    FunctionNotFound,
    /// Argument count mismatch at a call.
    Arity,
    /// Invalid numeric operation.
    Arithmetic,
    /// Too many nested calls.
    CallDepth,
    /// Input or output channel failure.
    Io,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use arrowlang::error::{Error, ErrorKind, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::DivisionByZero { line: 3 });
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(e) => match e {
                RuntimeError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
                RuntimeError::FunctionNotFound { .. } => ErrorKind::FunctionNotFound,
                RuntimeError::ArityMismatch { .. } => ErrorKind::Arity,
                RuntimeError::DivisionByZero { .. }
                | RuntimeError::TypeError { .. }
                | RuntimeError::Overflow { .. } => ErrorKind::Arithmetic,
                RuntimeError::CallDepthExceeded { .. } => ErrorKind::CallDepth,
                RuntimeError::InputClosed { .. } | RuntimeError::Io { .. } => ErrorKind::Io,
            },
        }
    }

    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Syntax(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning source text into tokens.
pub enum LexError {
    /// No token pattern matches at this position.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A numeric literal that cannot be represented (e.g. an integer wider
    /// than 64 bits).
    InvalidNumber {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character {character:?}.")
            },
            Self::InvalidNumber { literal, line } => {
                write!(f, "Error on line {line}: Number literal '{literal}' is out of range.")
            },
        }
    }
}

impl std::error::Error for LexError {}

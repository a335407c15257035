use logos::Logos;
use tracing::debug;

use crate::{error::LexError, interpreter::value::number::Number};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `3.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(Number),
    /// `->`
    #[token("->")]
    Arrow,
    /// Identifier tokens; variable or function names such as `x` or `wynik`.
    #[regex(r"[A-Za-z_À-ÖØ-öø-ɏ][A-Za-z0-9_À-ÖØ-öø-ɏ]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `print`
    #[token("print")]
    Print,
    /// `input`
    #[token("input")]
    Input,
    /// `function`
    #[token("function")]
    Function,
    /// `when`, reserved.
    #[token("when")]
    When,
    /// `otherwise`, reserved.
    #[token("otherwise")]
    Otherwise,
    /// `fallback`, reserved.
    #[token("fallback")]
    Fallback,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// String literal tokens, such as `"hello"`. The quotes are stripped and
    /// the contents are kept exactly as written, backslashes included.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Text(String),
    /// `,`
    #[token(",")]
    Comma,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Whether the token is one of the reserved keywords that have no
    /// meaning yet.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::When | Self::Otherwise | Self::Fallback)
    }

    /// Whether the token starts a statement on its own, regardless of what
    /// follows it.
    #[must_use]
    pub const fn is_statement_keyword(&self) -> bool {
        matches!(self, Self::Print | Self::Input | Self::Function) || self.is_reserved()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Text(s) => write!(f, "string \"{s}\""),
            Self::Arrow => write!(f, "'->'"),
            Self::Print => write!(f, "'print'"),
            Self::Input => write!(f, "'input'"),
            Self::Function => write!(f, "'function'"),
            Self::When => write!(f, "'when'"),
            Self::Otherwise => write!(f, "'otherwise'"),
            Self::Fallback => write!(f, "'fallback'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::Greater => write!(f, "'>'"),
            Self::Less => write!(f, "'<'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Comma => write!(f, "','"),
            Self::NewLine => write!(f, "line break"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into a sequence of tokens paired with the line on
/// which each token starts.
///
/// Whitespace and line breaks are discarded.
///
/// # Errors
/// - `UnexpectedCharacter` if no token pattern matches.
/// - `InvalidNumber` if an integer literal does not fit 64 bits.
///
/// # Example
/// ```
/// use arrowlang::interpreter::{lexer::{Token, tokenize}, value::number::Number};
///
/// let tokens = tokenize("x -> 2\nprint(x)").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[1], (Token::Arrow, 1));
/// assert_eq!(tokens[2], (Token::Number(Number::Integer(2)), 1));
/// assert_eq!(tokens[3], (Token::Print, 2));
///
/// assert!(tokenize("x -> 2 # 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    // Line of the current token, counted up to its first byte.
    let mut line = 1;
    let mut counted = 0;

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        line += source[counted..start].matches('\n').count();
        counted = start;

        let slice = lexer.slice();

        if let Ok(tok) = token {
            tokens.push((tok, line));
        } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(LexError::InvalidNumber { literal: slice.to_string(),
                                                 line });
        } else {
            let character = slice.chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character, line });
        }
    }

    debug!(tokens = tokens.len(), lines = lexer.extras.line, "tokenized source");
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(Number::Real)` if the slice contains a decimal point.
/// - `Some(Number::Integer)` otherwise.
/// - `None` if the integer does not fit into an `i64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<Number> {
    Number::parse_literal(lex.slice())
}

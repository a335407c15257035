/// The environment module holds variable bindings.
///
/// One environment exists for the globals of a run and one for every active
/// function call. Environments are fully isolated from each other.
pub mod environment;
/// The evaluator module executes parsed instructions.
///
/// The evaluator walks the instruction list, evaluates expressions, binds
/// variables, talks to the input and output channels and runs user
/// functions on an explicit call stack.
///
/// # Responsibilities
/// - Evaluates expressions with operator precedence.
/// - Executes assignments, output, input and calls.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Recognizes keywords among identifier-shaped words.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module groups tokens into instructions.
///
/// There is no statement terminator; the parser decides where a statement
/// ends by looking ahead at the following tokens. Function bodies are parsed
/// as soon as they are defined.
///
/// # Responsibilities
/// - Converts tokens into instructions and function definitions.
/// - Validates expression spans.
/// - Reports syntax errors naming the expected construct.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Values are numbers (integer or real) or text.
pub mod value;

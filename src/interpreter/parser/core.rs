use std::{collections::HashMap, iter::Peekable};

use tracing::debug;

use crate::{
    ast::{FunctionDef, Instruction, Program},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_function_definition,
            statement::{parse_assignment, parse_call, parse_input, parse_output},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole token sequence into a [`Program`].
///
/// This is the entry point of the parser. Top-level statements become the
/// program's instructions; function definitions, wherever they appear, are
/// collected into its function table.
///
/// # Errors
/// Returns the first `SyntaxError` encountered. Nothing is returned for the
/// statements parsed before it.
///
/// # Example
/// ```
/// use arrowlang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("function greet(name) { print(\"hi \" + name) } x -> 1 print(x)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.instructions.len(), 2);
/// assert_eq!(program.functions["greet"].params, vec!["name".to_string()]);
/// assert_eq!(program.functions["greet"].body.len(), 1);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut functions = HashMap::new();
    let instructions = parse_statements(&mut tokens.iter().peekable(), &mut functions)?;

    debug!(instructions = instructions.len(), functions = functions.len(), "parsed program");
    Ok(Program { instructions,
                 functions })
}

/// Parses statements until the token stream is exhausted.
///
/// Function definitions are registered in `functions` and produce no
/// instruction.
pub(in crate::interpreter::parser) fn parse_statements<'a, I>(
    tokens: &mut Peekable<I>,
    functions: &mut HashMap<String, FunctionDef>)
    -> ParseResult<Vec<Instruction>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut instructions = Vec::new();

    while tokens.peek().is_some() {
        if let Some(instruction) = parse_statement(tokens, functions)? {
            instructions.push(instruction);
        }
    }

    Ok(instructions)
}

/// Parses a single statement.
///
/// The statement kind is decided by its first one or two tokens:
///
/// - `function` starts a function definition,
/// - `print` starts an output statement,
/// - `input` starts an input statement,
/// - an identifier followed by `(` is a call,
/// - an identifier followed by `->` is an assignment.
///
/// # Returns
/// - `Ok(Some(instruction))` for executable statements,
/// - `Ok(None)` for function definitions.
///
/// # Errors
/// A `SyntaxError` if no statement grammar matches.
pub(in crate::interpreter::parser) fn parse_statement<'a, I>(
    tokens: &mut Peekable<I>,
    functions: &mut HashMap<String, FunctionDef>)
    -> ParseResult<Option<Instruction>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(&(token, line)) = tokens.peek() else {
        return Err(SyntaxError::UnexpectedEndOfInput { expected: "a statement".to_string(),
                                                       line:     0, });
    };
    let line = *line;

    match token {
        Token::Function => {
            parse_function_definition(tokens, functions, line)?;
            Ok(None)
        },
        Token::Print => parse_output(tokens, line).map(Some),
        Token::Input => parse_input(tokens, line).map(Some),
        Token::Identifier(name) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            match lookahead.peek() {
                Some((Token::LParen, _)) => parse_call(tokens, line).map(Some),
                Some((Token::Arrow, _)) => parse_assignment(tokens, line).map(Some),
                Some((tok, line)) => {
                    Err(SyntaxError::Expected { expected: format!("'->' or '(' after '{name}'"),
                                                found:    tok.to_string(),
                                                line:     *line, })
                },
                None => Err(SyntaxError::UnexpectedEndOfInput { expected:
                                                                    format!("'->' or '(' after '{name}'"),
                                                                line }),
            }
        },
        tok if tok.is_reserved() => {
            Err(SyntaxError::ReservedKeyword { keyword: tok.to_string().trim_matches('\'').to_string(),
                                               line })
        },
        tok => Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                  line }),
    }
}

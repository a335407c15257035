use std::{collections::HashMap, iter::Peekable};

use tracing::{debug, warn};

use crate::{
    ast::FunctionDef,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_statements},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a function definition and registers it in `functions`.
///
/// Syntax:
/// ```text
///     function <name>(<param>, <param>, ...) { <statements> }
/// ```
///
/// The tokens between the braces are captured first, counting nested braces
/// so that a definition inside the body is captured whole, and are then parsed
/// into instructions right away. Definitions found inside the body are
/// registered in the same table as top-level ones.
///
/// A second definition with the same name replaces the first.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the name, `(`, `)` or `{` is missing,
/// - a parameter is not an identifier,
/// - the closing `}` is never found,
/// - the body does not parse.
pub(in crate::interpreter::parser) fn parse_function_definition<'a, I>(
    tokens: &mut Peekable<I>,
    functions: &mut HashMap<String, FunctionDef>,
    line: usize)
    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((tok, line)) => {
            return Err(SyntaxError::Expected { expected: "a function name after 'function'".to_string(),
                                               found:    tok.to_string(),
                                               line:     *line, });
        },
        None => {
            return Err(SyntaxError::UnexpectedEndOfInput { expected:
                                                               "a function name after 'function'".to_string(),
                                                           line });
        },
    };

    expect(tokens, &Token::LParen, "'(' after the function name", line)?;
    let params = parse_comma_separated(tokens,
                                       parse_identifier,
                                       &Token::RParen,
                                       ')',
                                       "parameter list",
                                       line)?;
    expect(tokens, &Token::LBrace, "'{' to open the function body", line)?;

    let body_tokens = capture_block(tokens, line)?;
    let body = parse_statements(&mut body_tokens.iter().copied().peekable(), functions)?;

    debug!(function = %name, params = params.len(), instructions = body.len(), "defined function");

    let def = FunctionDef { name: name.clone(),
                            params,
                            body,
                            line };
    if let Some(previous) = functions.insert(name, def) {
        warn!(function = %previous.name, first = previous.line, line, "function redefined");
    }
    Ok(())
}

/// Collects the tokens of a brace-delimited block.
///
/// The stream must be positioned right after the opening `{`. The matching
/// `}` is consumed but not returned.
///
/// # Errors
/// `MissingDelimiter` if the input ends before the block is closed.
fn capture_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<&'a (Token, usize)>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut depth = 1;
    let mut body = Vec::new();

    for item in tokens.by_ref() {
        match item.0 {
            Token::LBrace => depth += 1,
            Token::RBrace => {
                depth -= 1;
                if depth == 0 {
                    return Ok(body);
                }
            },
            _ => {},
        }
        body.push(item);
    }

    Err(SyntaxError::MissingDelimiter { delimiter: '}',
                                        construct: "function body",
                                        line })
}

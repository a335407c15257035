use std::iter::Peekable;

use crate::{
    ast::Instruction,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            expression::parse_expression,
            utils::{at_assignment, collect_until_rparen, expect, parse_identifier},
        },
    },
};

/// Parses an assignment of the form `<identifier> -> <expression>`.
///
/// There is no statement terminator. The expression extends up to, but not
/// including, the next token that starts a statement by itself:
///
/// - an identifier immediately followed by `->`,
/// - `print`, `input` or `function`,
/// - one of the reserved keywords.
///
/// Everything in between, line breaks included, belongs to the expression.
///
/// # Errors
/// Returns a `SyntaxError` if the collected span is not a valid expression.
pub(in crate::interpreter::parser) fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<Instruction>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Arrow, "'->'", line)?;

    let mut span = Vec::new();
    while let Some(&item) = tokens.peek() {
        if item.0.is_statement_keyword() || at_assignment(tokens) {
            break;
        }
        span.push(item);
        tokens.next();
    }

    let value = parse_expression(&span, line)?;
    Ok(Instruction::Assign { name, value, line })
}

/// Parses an output statement of the form `print(<expression>)`.
///
/// The expression is every token up to the first `)`.
///
/// # Errors
/// Returns a `SyntaxError` if `(` or `)` is missing or the expression is
/// invalid.
pub(in crate::interpreter::parser) fn parse_output<'a, I>(tokens: &mut Peekable<I>,
                                                          line: usize)
                                                          -> ParseResult<Instruction>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    expect(tokens, &Token::LParen, "'(' after 'print'", line)?;
    let span = collect_until_rparen(tokens, "print", line)?;

    let value = parse_expression(&span, line)?;
    Ok(Instruction::Output { value, line })
}

/// Parses an input statement of the form `input("<prompt>")`.
///
/// The only accepted argument is a single string literal.
///
/// # Errors
/// Returns a `SyntaxError` for any other argument shape or a missing
/// delimiter.
pub(in crate::interpreter::parser) fn parse_input<'a, I>(tokens: &mut Peekable<I>,
                                                         line: usize)
                                                         -> ParseResult<Instruction>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    expect(tokens, &Token::LParen, "'(' after 'input'", line)?;

    let prompt = match tokens.next() {
        Some((Token::Text(prompt), _)) => prompt.clone(),
        Some((tok, line)) => {
            return Err(SyntaxError::Expected { expected: "a string prompt for 'input'".to_string(),
                                               found:    tok.to_string(),
                                               line:     *line, });
        },
        None => {
            return Err(SyntaxError::UnexpectedEndOfInput { expected:
                                                               "a string prompt for 'input'".to_string(),
                                                           line });
        },
    };

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Instruction::Input { prompt, line }),
        Some((tok, line)) => Err(SyntaxError::Expected { expected: "')' after the prompt of 'input'".to_string(),
                                                         found:    tok.to_string(),
                                                         line:     *line, }),
        None => Err(SyntaxError::MissingDelimiter { delimiter: ')',
                                                    construct: "input",
                                                    line }),
    }
}

/// Parses a function call of the form `<identifier>(<expr>, <expr>, ...)`.
///
/// The argument list ends at the first `)`. It is split on commas and every
/// part is parsed as an expression of its own.
///
/// # Errors
/// Returns a `SyntaxError` if `)` is missing, an argument is empty, or an
/// argument is not a valid expression.
pub(in crate::interpreter::parser) fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<Instruction>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen, "'('", line)?;
    let span = collect_until_rparen(tokens, "function call", line)?;

    let mut arguments = Vec::new();
    if !span.is_empty() {
        for argument in span.split(|(tok, _)| *tok == Token::Comma) {
            if argument.is_empty() {
                return Err(SyntaxError::EmptyArgument { function: name, line });
            }
            arguments.push(parse_expression(argument, line)?);
        }
    }

    Ok(Instruction::Call { name,
                           arguments,
                           line })
}

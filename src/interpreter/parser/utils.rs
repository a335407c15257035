use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
/// - `closing_char`: The closing delimiter as it is reported in errors.
/// - `construct`: Name of the construct the list belongs to.
/// - `line`: Line of the construct, used when the input ends early.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    closing_char: char,
    construct: &'static str,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        if tokens.peek().is_none() {
            return Err(SyntaxError::MissingDelimiter { delimiter: closing_char,
                                                       construct,
                                                       line });
        }
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(SyntaxError::Expected { expected: format!("',' or '{closing_char}'"),
                                                   found:    tok.to_string(),
                                                   line:     *line, });
            },
            None => {
                return Err(SyntaxError::MissingDelimiter { delimiter: closing_char,
                                                           construct,
                                                           line });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are never
/// identifiers, so they are rejected here as well.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(SyntaxError::Expected { expected: "an identifier".to_string(),
                                                         found:    tok.to_string(),
                                                         line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { expected: "an identifier".to_string(),
                                                        line:     0, }),
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `description`: What is reported in the error, e.g. `'(' after 'print'`.
/// - `line`: Line of the surrounding construct, used when the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str,
                                                    line: usize)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => Err(SyntaxError::Expected { expected: description.to_string(),
                                                         found:    tok.to_string(),
                                                         line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { expected: description.to_string(),
                                                        line }),
    }
}

/// Collects every token up to the first `)` and consumes the `)`.
///
/// Parentheses are not counted: the first closing parenthesis ends the span.
///
/// # Errors
/// `MissingDelimiter` if the input ends before a `)` is found.
pub(in crate::interpreter::parser) fn collect_until_rparen<'a, I>(
    tokens: &mut Peekable<I>,
    construct: &'static str,
    line: usize)
    -> ParseResult<Vec<&'a (Token, usize)>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut span = Vec::new();
    for item in tokens.by_ref() {
        if item.0 == Token::RParen {
            return Ok(span);
        }
        span.push(item);
    }
    Err(SyntaxError::MissingDelimiter { delimiter: ')',
                                        construct,
                                        line })
}

/// Returns `true` if the token after the next one is `->`, i.e. the stream is
/// positioned at the start of an assignment. Does not consume anything.
pub(in crate::interpreter::parser) fn at_assignment<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    matches!(lookahead.next(), Some((Token::Identifier(_), _)))
    && matches!(lookahead.next(), Some((Token::Arrow, _)))
}

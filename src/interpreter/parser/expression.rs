use crate::{
    ast::{BinaryOperator, Expression, Operand},
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult, value::core::Value},
};

/// Turns a captured token span into an [`Expression`].
///
/// The span must alternate operands (numbers, strings, identifiers) and
/// arithmetic operators, beginning and ending with an operand. Grouping
/// parentheses, comparison operators and other tokens have no evaluation
/// rule and are rejected.
///
/// Grammar: `expression := operand (("+" | "-" | "*" | "/") operand)*`
///
/// # Parameters
/// - `span`: The tokens of the expression, in source order.
/// - `line`: Line of the owning statement, reported for an empty span.
///
/// # Errors
/// - `EmptyExpression` if the span has no tokens.
/// - `Expected` if an operand or operator is missing.
/// - `Unsupported` / `ReservedKeyword` for tokens without an evaluation rule.
pub fn parse_expression(span: &[&(Token, usize)], line: usize) -> ParseResult<Expression> {
    let mut items = span.iter().copied();

    let Some((token, first_line)) = items.next() else {
        return Err(SyntaxError::EmptyExpression { line });
    };
    let first = parse_operand(token, *first_line)?;

    let mut rest = Vec::new();
    while let Some((token, op_line)) = items.next() {
        let op = parse_operator(token, *op_line)?;
        let operand = match items.next() {
            Some((token, line)) => parse_operand(token, *line)?,
            None => {
                return Err(SyntaxError::Expected { expected: format!("an operand after '{op}'"),
                                                   found:    "end of expression".to_string(),
                                                   line:     *op_line, });
            },
        };
        rest.push((op, *op_line, operand));
    }

    Ok(Expression { first,
                    rest,
                    line: *first_line })
}

/// Parses a single operand token.
fn parse_operand(token: &Token, line: usize) -> ParseResult<Operand> {
    match token {
        Token::Number(n) => Ok(Operand::Literal { value: Value::Number(*n),
                                                  line }),
        Token::Text(s) => Ok(Operand::Literal { value: Value::Text(s.clone()),
                                                line }),
        Token::Identifier(name) => Ok(Operand::Variable { name: name.clone(),
                                                          line }),
        Token::Plus | Token::Minus | Token::Star | Token::Slash => {
            Err(SyntaxError::Expected { expected: "an operand".to_string(),
                                        found: token.to_string(),
                                        line })
        },
        other => Err(unsupported(other, line)),
    }
}

/// Parses a single arithmetic operator token.
fn parse_operator(token: &Token, line: usize) -> ParseResult<BinaryOperator> {
    match token {
        Token::Plus => Ok(BinaryOperator::Add),
        Token::Minus => Ok(BinaryOperator::Sub),
        Token::Star => Ok(BinaryOperator::Mul),
        Token::Slash => Ok(BinaryOperator::Div),
        Token::Number(_) | Token::Text(_) | Token::Identifier(_) => {
            Err(SyntaxError::Expected { expected: "an operator".to_string(),
                                        found: token.to_string(),
                                        line })
        },
        other => Err(unsupported(other, line)),
    }
}

fn unsupported(token: &Token, line: usize) -> SyntaxError {
    if token.is_reserved() {
        let keyword = token.to_string().trim_matches('\'').to_string();
        return SyntaxError::ReservedKeyword { keyword, line };
    }
    SyntaxError::Unsupported { token: token.to_string(),
                               line }
}

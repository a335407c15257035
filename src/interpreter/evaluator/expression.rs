use crate::{
    ast::{BinaryOperator, Expression, Operand},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an expression against an environment.
///
/// Precedence is resolved in a single left-to-right pass with an operand
/// stack and an operator stack. Before an operator is pushed, every pending
/// operator with the same or a higher precedence is applied, which makes
/// `*` and `/` bind tighter than `+` and `-` and keeps operators of equal
/// precedence left-associative. Whatever is still pending at the end is
/// applied from the top of the stack down.
///
/// Only the given environment is consulted; there is no fallback to an
/// enclosing scope.
///
/// # Errors
/// - `UndefinedVariable` if an identifier is not bound in `env`.
/// - `DivisionByZero`, `TypeError` or `Overflow` from applying an operator.
///
/// # Example
/// ```
/// use arrowlang::interpreter::{
///     environment::Environment,
///     evaluator::expression::evaluate,
///     lexer::tokenize,
///     parser::core::parse_program,
///     value::core::Value,
/// };
/// use arrowlang::ast::Instruction;
///
/// let tokens = tokenize("x -> 10 - 4 - 3 + 2 * 3").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// let Instruction::Assign { value, .. } = &program.instructions[0] else { unreachable!() };
///
/// assert_eq!(evaluate(value, &Environment::new()).unwrap(), Value::from(9));
/// ```
pub fn evaluate(expr: &Expression, env: &Environment) -> EvalResult<Value> {
    let mut operands = vec![resolve(&expr.first, env)?];
    let mut operators: Vec<(BinaryOperator, usize)> = Vec::new();

    for (op, line, operand) in &expr.rest {
        while let Some(&(pending, pending_line)) = operators.last()
              && pending.precedence() >= op.precedence()
        {
            operators.pop();
            apply(&mut operands, pending, pending_line)?;
        }
        operators.push((*op, *line));
        operands.push(resolve(operand, env)?);
    }

    while let Some((op, line)) = operators.pop() {
        apply(&mut operands, op, line)?;
    }

    let Some(result) = operands.pop() else {
        unreachable!("an expression always has at least one operand")
    };
    Ok(result)
}

/// Produces the value of a single operand.
fn resolve(operand: &Operand, env: &Environment) -> EvalResult<Value> {
    match operand {
        Operand::Literal { value, .. } => Ok(value.clone()),
        Operand::Variable { name, line } => {
            env.get(name)
               .cloned()
               .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                line: *line, })
        },
    }
}

/// Pops two operands (right, then left) and pushes `left op right`.
fn apply(operands: &mut Vec<Value>, op: BinaryOperator, line: usize) -> EvalResult<()> {
    let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
        unreachable!("every pending operator has two operands on the stack")
    };
    operands.push(left.binary(op, &right, line)?);
    Ok(())
}

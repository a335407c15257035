use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
};

/// Represents a runtime value in the interpreter.
///
/// The language knows exactly two kinds of data. Every operator checks the
/// variants of its operands explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer or real number.
    Number(Number),
    /// A piece of text, from a string literal or from user input.
    Text(String),
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Integer(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Real(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Returns a short name of the value's type for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(Number::Integer(_)) => "integer",
            Self::Number(Number::Real(_)) => "real",
            Self::Text(_) => "text",
        }
    }

    /// Applies a binary arithmetic operator.
    ///
    /// `+` adds two numbers and concatenates the textual representations of
    /// its operands as soon as either of them is text. `-`, `*` and `/` only
    /// accept numbers.
    ///
    /// # Errors
    /// - `TypeError` if `-`, `*` or `/` receive text.
    /// - Any numeric error from [`Number::apply`].
    ///
    /// # Example
    /// ```
    /// use arrowlang::{ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let joined = Value::from("total: ").binary(BinaryOperator::Add, &Value::from(3), 1);
    /// assert_eq!(joined.unwrap(), Value::from("total: 3"));
    ///
    /// let product = Value::from(2).binary(BinaryOperator::Mul, &Value::from(2.5), 1);
    /// assert_eq!(product.unwrap(), Value::from(5.0));
    ///
    /// assert!(Value::from("a").binary(BinaryOperator::Sub, &Value::from(1), 1).is_err());
    /// ```
    pub fn binary(&self, op: BinaryOperator, rhs: &Self, line: usize) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(a.apply(op, *b, line)?)),
            (a, b) if op == BinaryOperator::Add => Ok(Self::Text(format!("{a}{b}"))),
            (a, b) => {
                Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                                a.type_name(),
                                                                b.type_name()),
                                              line })
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::format_real,
};

/// A numeric runtime value.
///
/// Literals without a decimal point become `Integer`, all others `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Parses a numeric literal as written in the source.
    ///
    /// Returns `None` if the literal cannot be represented.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::parse_literal("42"), Some(Number::Integer(42)));
    /// assert_eq!(Number::parse_literal("3."), Some(Number::Real(3.0)));
    /// assert_eq!(Number::parse_literal("99999999999999999999"), None);
    /// ```
    #[must_use]
    pub fn parse_literal(literal: &str) -> Option<Self> {
        if literal.contains('.') {
            literal.parse().ok().map(Self::Real)
        } else {
            literal.parse().ok().map(Self::Integer)
        }
    }

    /// Converts the number to an `f64`. Integers beyond 2^53 are rounded
    /// to the nearest representable real.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Integer(9_007_199_254_740_993).as_real(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// Integer addition, subtraction and multiplication are checked for
    /// overflow. If either side is real, both are promoted to real. Division
    /// always produces a real.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor is zero.
    /// - `Overflow` on integer overflow.
    ///
    /// # Example
    /// ```
    /// use arrowlang::{ast::BinaryOperator, interpreter::value::number::Number};
    ///
    /// let six = Number::Integer(6);
    /// let four = Number::Integer(4);
    ///
    /// assert_eq!(six.apply(BinaryOperator::Sub, four, 1).unwrap(), Number::Integer(2));
    /// assert_eq!(six.apply(BinaryOperator::Div, four, 1).unwrap(), Number::Real(1.5));
    /// assert!(six.apply(BinaryOperator::Div, Number::Real(0.0), 1).is_err());
    /// ```
    pub fn apply(self, op: BinaryOperator, rhs: Self, line: usize) -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Div {
            let divisor = rhs.as_real();
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            return Ok(Self::Real(self.as_real() / divisor));
        }

        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => unreachable!(),
                };
                result.map(Self::Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let a = self.as_real();
                let b = rhs.as_real();
                Ok(Self::Real(match op {
                                  Add => a + b,
                                  Sub => a - b,
                                  Mul => a * b,
                                  Div => unreachable!(),
                              }))
            },
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
        }
    }
}

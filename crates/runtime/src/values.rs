use std::fmt::Display;

use frontend::lexer::{Literal, TokenKind};
use tools::position::Position;

use crate::context::Context;
use crate::interpreter::InterpreterError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i64),
    Float(f64),
}

impl From<Literal> for NumericValue {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Int(nb) => NumericValue::Int(nb),
            Literal::Float(nb) => NumericValue::Float(nb),
        }
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::Int(nb) => write!(f, "{}", nb),
            NumericValue::Float(nb) => write!(f, "{:?}", nb),
        }
    }
}

impl NumericValue {
    pub fn is_zero(&self) -> bool {
        match self {
            NumericValue::Int(nb) => *nb == 0,
            NumericValue::Float(nb) => *nb == 0.,
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            NumericValue::Int(nb) => *nb as f64,
            NumericValue::Float(nb) => *nb,
        }
    }
}

// Two ints stay an int unless the result overflows. Division is always
// a float division.
fn compute(lhs: NumericValue, rhs: NumericValue, operator: &TokenKind) -> NumericValue {
    if let (NumericValue::Int(a), NumericValue::Int(b)) = (lhs, rhs) {
        let exact = match operator {
            TokenKind::Plus => a.checked_add(b),
            TokenKind::Minus => a.checked_sub(b),
            TokenKind::Mul => a.checked_mul(b),
            _ => None,
        };

        if let Some(nb) = exact {
            return NumericValue::Int(nb);
        }
    }

    let (a, b) = (lhs.as_f64(), rhs.as_f64());

    NumericValue::Float(match operator {
        TokenKind::Plus => a + b,
        TokenKind::Minus => a - b,
        TokenKind::Mul => a * b,
        TokenKind::Div => a / b,
        other => unreachable!("{other} is not a binary operator"),
    })
}

/// Only value the interpreter produces. Never mutated, every operation
/// builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: NumericValue,
    pub start: Position,
    pub end: Position,
    pub context: Context,
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Number {
    pub fn new(value: NumericValue, start: Position, end: Position, context: Context) -> Self {
        Self {
            value,
            start,
            end,
            context,
        }
    }

    pub fn set_pos(self, start: Position, end: Position) -> Self {
        Self { start, end, ..self }
    }

    pub fn calculate(
        &self,
        rhs: &Number,
        operator: &TokenKind,
    ) -> Result<Number, InterpreterError> {
        if *operator == TokenKind::Div && rhs.value.is_zero() {
            return Err(InterpreterError::DivisionByZero {
                start: rhs.start.clone(),
                end: rhs.end.clone(),
                context: self.context.clone(),
            });
        }

        Ok(Number::new(
            compute(self.value, rhs.value, operator),
            self.start.clone(),
            rhs.end.clone(),
            self.context.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: NumericValue) -> Number {
        let pos = Position::new("<test>", "0");
        Number::new(value, pos.clone(), pos.next(Some('0')), Context::new_root("<program>"))
    }

    fn calc(lhs: NumericValue, rhs: NumericValue, operator: TokenKind) -> NumericValue {
        number(lhs).calculate(&number(rhs), &operator).unwrap().value
    }

    #[test]
    fn calculate() {
        use NumericValue::*;

        assert_eq!(calc(Int(2), Int(3), TokenKind::Plus), Int(5));
        assert_eq!(calc(Int(2), Int(3), TokenKind::Minus), Int(-1));
        assert_eq!(calc(Int(2), Int(3), TokenKind::Mul), Int(6));
        assert_eq!(calc(Int(7), Int(2), TokenKind::Div), Float(3.5));
        assert_eq!(calc(Int(6), Int(3), TokenKind::Div), Float(2.));
        assert_eq!(calc(Float(1.5), Int(1), TokenKind::Plus), Float(2.5));
        assert_eq!(calc(Int(1), Float(0.5), TokenKind::Mul), Float(0.5));
    }

    #[test]
    fn int_overflow_falls_back_to_float() {
        use NumericValue::*;

        assert_eq!(calc(Int(i64::MAX), Int(1), TokenKind::Plus), Float(i64::MAX as f64 + 1.));
        assert_eq!(calc(Int(i64::MIN), Int(-1), TokenKind::Mul), Float(-(i64::MIN as f64)));
    }

    #[test]
    fn division_by_zero() {
        let err = number(NumericValue::Int(1))
            .calculate(&number(NumericValue::Float(0.)), &TokenKind::Div)
            .unwrap_err();

        assert!(matches!(err, InterpreterError::DivisionByZero { .. }));
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn display() {
        assert_eq!(number(NumericValue::Int(14)).to_string(), "14");
        assert_eq!(number(NumericValue::Float(5.)).to_string(), "5.0");
        assert_eq!(number(NumericValue::Float(0.25)).to_string(), "0.25");
    }
}

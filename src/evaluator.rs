//! Stack-based evaluation of single-character postfix sequences.

use crate::error::ExprError;
use crate::mode::Mode;
use crate::stack::BoundedStack;
use crate::token::{Operator, Token};
use tracing::{trace, warn};

/// Evaluate `postfix` with the permissive rules.
///
/// Missing operands read as `0`, operands pushed onto a full stack are dropped,
/// arithmetic wraps and any character that is not an operator is an operand worth
/// `ch - '0'`. Only a zero divisor is reported.
///
/// Example
/// ```
/// use postfix_calc::evaluate;
/// assert_eq!(evaluate("342*+").unwrap(), 11);
/// assert_eq!(evaluate("72/").unwrap(), 3);
/// assert_eq!(evaluate("+").unwrap(), 0);
/// ```
pub fn evaluate(postfix: &str) -> Result<i64, ExprError> {
    evaluate_with_mode(postfix, Mode::Permissive)
}

/// Evaluate `postfix`, reporting every malformed sequence as an error.
pub fn try_evaluate(postfix: &str) -> Result<i64, ExprError> {
    evaluate_with_mode(postfix, Mode::Strict)
}

pub fn evaluate_with_mode(postfix: &str, mode: Mode) -> Result<i64, ExprError> {
    let mut operands = OperandStack::new(mode);

    for (position, ch) in postfix.chars().enumerate() {
        match Token::classify(ch) {
            Token::Operator(op) => {
                let rhs = operands.pop()?;
                let lhs = operands.pop()?;
                let value = apply(op, lhs, rhs, mode)?;
                trace!(%op, lhs, rhs, value, "evaluator step");
                operands.push(value)?;
            }
            Token::Digit(digit) => operands.push(i64::from(digit))?,
            _ if mode.is_strict() => {
                return Err(ExprError::UnsupportedToken { token: ch, position });
            }
            _ => operands.push(ch as i64 - '0' as i64)?,
        }
    }

    let result = operands.pop()?;
    if mode.is_strict() && !operands.inner.is_empty() {
        return Err(ExprError::InvalidExpression(format!(
            "{} operand(s) left without an operator",
            operands.inner.len()
        )));
    }
    Ok(result)
}

fn apply(op: Operator, lhs: i64, rhs: i64, mode: Mode) -> Result<i64, ExprError> {
    if op == Operator::Div && rhs == 0 {
        return Err(ExprError::DivisionByZero);
    }
    match mode {
        Mode::Strict => op
            .checked_apply(lhs, rhs)
            .ok_or(ExprError::ArithmeticOverflow),
        Mode::Permissive => op
            .wrapping_apply(lhs, rhs)
            .ok_or(ExprError::DivisionByZero),
    }
}

struct OperandStack {
    inner: BoundedStack<i64>,
    mode: Mode,
}

impl OperandStack {
    fn new(mode: Mode) -> Self {
        Self {
            inner: BoundedStack::new(),
            mode,
        }
    }

    fn push(&mut self, value: i64) -> Result<(), ExprError> {
        match self.inner.try_push(value) {
            Ok(()) => Ok(()),
            Err(err) if self.mode.is_strict() => Err(err.into()),
            Err(_) => {
                warn!(value, "operand stack full, dropping value");
                Ok(())
            }
        }
    }

    fn pop(&mut self) -> Result<i64, ExprError> {
        match self.inner.try_pop() {
            Ok(value) => Ok(value),
            Err(err) if self.mode.is_strict() => Err(err.into()),
            Err(_) => {
                warn!("operand stack empty, reading 0");
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_basic_postfix() {
        assert_eq!(evaluate("342*+").unwrap(), 11);
        assert_eq!(evaluate("532+*").unwrap(), 25);
        assert_eq!(evaluate("93-2-").unwrap(), 4);
        assert_eq!(evaluate("7").unwrap(), 7);
    }

    #[test]
    fn test_right_operand_is_popped_first() {
        assert_eq!(evaluate("31-").unwrap(), 2);
        assert_eq!(evaluate("82/").unwrap(), 4);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(evaluate("72/").unwrap(), 3);
        assert_eq!(evaluate("07-2/").unwrap(), -3);
    }

    #[test]
    fn test_division_by_zero_in_both_modes() {
        assert_eq!(evaluate("10/"), Err(ExprError::DivisionByZero));
        assert_eq!(try_evaluate("10/"), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_permissive_underflow_reads_zero() {
        assert_eq!(evaluate("+").unwrap(), 0);
        assert_eq!(evaluate("5-").unwrap(), -5);
        assert_eq!(evaluate("").unwrap(), 0);
    }

    #[test]
    fn test_strict_underflow_is_invalid_expression() {
        assert!(matches!(try_evaluate("+"), Err(ExprError::InvalidExpression(_))));
        assert!(matches!(try_evaluate(""), Err(ExprError::InvalidExpression(_))));
    }

    #[test]
    fn test_strict_leftover_operands() {
        assert!(matches!(try_evaluate("12"), Err(ExprError::InvalidExpression(_))));
        // permissive returns the top and ignores the rest
        assert_eq!(evaluate("12").unwrap(), 2);
    }

    #[test]
    fn test_operand_stack_capacity() {
        let ten_operands = "1234567891";
        assert_eq!(
            try_evaluate(ten_operands),
            Err(ExprError::CapacityExceeded { capacity: 9 })
        );
        // the tenth operand is dropped, the top stays 9
        assert_eq!(evaluate(ten_operands).unwrap(), 9);
        assert_eq!(evaluate("123456789++++++++").unwrap(), 45);
    }

    #[test]
    fn test_unknown_chars() {
        // 'a' - '0' == 49
        assert_eq!(evaluate("a").unwrap(), 49);
        assert_eq!(
            try_evaluate("1a+"),
            Err(ExprError::UnsupportedToken {
                token: 'a',
                position: 1
            })
        );
        assert!(matches!(
            try_evaluate("12+("),
            Err(ExprError::UnsupportedToken { token: '(', .. })
        ));
    }

    #[test]
    fn test_strict_overflow_vs_permissive_wrap() {
        // 9^20 exceeds i64::MAX
        let mut postfix = String::from("9");
        for _ in 0..20 {
            postfix.push_str("9*");
        }
        assert_eq!(try_evaluate(&postfix), Err(ExprError::ArithmeticOverflow));
        assert!(evaluate(&postfix).is_ok());
    }
}

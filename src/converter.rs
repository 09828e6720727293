//! Infix to postfix conversion over single-character tokens.
//!
//! A simplified shunting-yard pass: digits go straight to the output, operators and
//! parentheses go through a bounded operator stack whose order is resolved by
//! [`has_precedence`]. Parentheses never reach the output.

use crate::error::ExprError;
use crate::mode::Mode;
use crate::precedence::has_precedence;
use crate::stack::BoundedStack;
use crate::token::Token;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{trace, warn};

/// Matches the first character outside the supported alphabet.
static UNSUPPORTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9+\-*/()]").expect("static pattern is valid")
});

/// Convert `expression` to postfix with the permissive rules: no validation,
/// full stacks drop symbols and unmatched parentheses are not diagnosed.
///
/// Example
/// ```
/// use postfix_calc::convert_to_postfix;
/// assert_eq!(convert_to_postfix("3+4*2"), "342*+");
/// assert_eq!(convert_to_postfix("5*(3+2)"), "532+*");
/// ```
pub fn convert_to_postfix(expression: &str) -> String {
    let converted = convert_with_mode(expression, Mode::Permissive);
    debug_assert!(converted.is_ok(), "permissive conversion failed: {:?}", converted);
    converted.unwrap_or_default()
}

/// Convert `expression` to postfix, rejecting unsupported characters, unbalanced
/// parentheses and expressions that need more than the stack capacity.
pub fn try_convert_to_postfix(expression: &str) -> Result<String, ExprError> {
    convert_with_mode(expression, Mode::Strict)
}

/// Convert `expression` following the rules of `mode`.
pub fn convert_with_mode(expression: &str, mode: Mode) -> Result<String, ExprError> {
    if let Some(found) = UNSUPPORTED.find(expression).filter(|_| mode.is_strict()) {
        let position = expression[..found.start()].chars().count();
        let token = found.as_str().chars().next().unwrap_or_default();
        return Err(ExprError::UnsupportedToken { token, position });
    }

    let mut stack = OperatorStack::new(mode);
    let mut out = String::with_capacity(expression.len());
    for ch in expression.chars() {
        step(&mut stack, &mut out, ch)?;
    }
    drain(&mut stack, &mut out)?;
    Ok(out)
}

/// Operator stack that either propagates stack failures or hides them.
struct OperatorStack {
    inner: BoundedStack<char>,
    mode: Mode,
}

impl OperatorStack {
    fn new(mode: Mode) -> Self {
        Self {
            inner: BoundedStack::new(),
            mode,
        }
    }

    fn push(&mut self, ch: char) -> Result<(), ExprError> {
        match self.inner.try_push(ch) {
            Ok(()) => Ok(()),
            Err(err) if self.mode.is_strict() => Err(err.into()),
            Err(_) => {
                warn!(symbol = %ch, "operator stack full, dropping symbol");
                Ok(())
            }
        }
    }

    fn pop(&mut self) -> char {
        self.inner.pop()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Process one input character.
fn step(stack: &mut OperatorStack, out: &mut String, ch: char) -> Result<(), ExprError> {
    if !Token::classify(ch).is_stack_symbol() {
        out.push(ch);
        return Ok(());
    }

    // Pop while the top outranks `ch`. `top` is only removed provisionally: when the
    // loop stops on a symbol that does not outrank `ch`, that symbol goes back.
    let mut emptied = stack.is_empty();
    while !emptied {
        let top = stack.pop();
        if !has_precedence(top, ch) {
            stack.push(top)?;
            break;
        }
        out.push(top);
        emptied = stack.is_empty();
    }

    if emptied || ch != ')' {
        if ch == ')' && stack.mode.is_strict() {
            return Err(ExprError::InvalidExpression(
                "unmatched ')'".to_string(),
            ));
        }
        stack.push(ch)?;
    } else {
        // the symbol left on top is the matching '('
        let opening = stack.pop();
        if opening != '(' && stack.mode.is_strict() {
            return Err(ExprError::InvalidExpression(
                "unmatched ')'".to_string(),
            ));
        }
    }

    trace!(symbol = %ch, output = %out, depth = stack.inner.len(), "converter step");
    Ok(())
}

/// Flush everything left on the stack to `out`, in pop order.
fn drain(stack: &mut OperatorStack, out: &mut String) -> Result<(), ExprError> {
    while !stack.is_empty() {
        let top = stack.pop();
        if stack.mode.is_strict() && top == '(' {
            return Err(ExprError::InvalidExpression("unmatched '('".to_string()));
        }
        out.push(top);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_reorders_operators() {
        assert_eq!(convert_to_postfix("3+4*2"), "342*+");
        assert_eq!(convert_to_postfix("3*4+2"), "34*2+");
        assert_eq!(convert_to_postfix("8/4-1"), "84/1-");
    }

    #[test]
    fn test_parentheses_are_stripped() {
        assert_eq!(convert_to_postfix("5*(3+2)"), "532+*");
        assert_eq!(convert_to_postfix("(1+2)*(3-4)"), "12+34-*");
        assert_eq!(convert_to_postfix("((7))"), "7");
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        assert_eq!(convert_to_postfix("9-3-2"), "93-2-");
        assert_eq!(convert_to_postfix("8/4/2"), "84/2/");
        assert_eq!(convert_to_postfix("1+2-3+4"), "12+3-4+");
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(convert_to_postfix(""), "");
        assert_eq!(try_convert_to_postfix("").unwrap(), "");
    }

    #[test]
    fn test_already_postfix_is_unchanged() {
        for postfix in ["342*+", "12+", "123*+", "7"] {
            assert_eq!(convert_to_postfix(postfix), postfix);
        }
    }

    #[test]
    fn test_postfix_with_operand_after_operator_is_reordered() {
        // the first '-' is still parked when '2' is emitted
        assert_eq!(convert_to_postfix("93-2-"), "932--");
        assert_eq!(convert_to_postfix("12+3-"), "123+-");
    }

    #[test]
    fn test_permissive_passes_unknown_chars_through() {
        assert_eq!(convert_to_postfix("a+b"), "ab+");
        // multi-digit numbers are separate operands
        assert_eq!(convert_to_postfix("12+3"), "123+");
    }

    #[test]
    fn test_consecutive_operators_are_not_rejected() {
        assert_eq!(convert_to_postfix("1+*2"), "12*+");
        assert_eq!(try_convert_to_postfix("1+*2").unwrap(), "12*+");
    }

    #[test]
    fn test_permissive_unmatched_parens() {
        // a stray ')' lands on the empty stack and is flushed at the end
        assert_eq!(convert_to_postfix("1+2)"), "12+)");
        assert_eq!(convert_to_postfix("(1+2"), "12+(");
    }

    #[test]
    fn test_strict_rejects_unbalanced_parens() {
        assert!(matches!(
            try_convert_to_postfix("1+2)"),
            Err(ExprError::InvalidExpression(_))
        ));
        assert!(matches!(
            try_convert_to_postfix("(1+2"),
            Err(ExprError::InvalidExpression(_))
        ));
        assert!(matches!(
            try_convert_to_postfix(")"),
            Err(ExprError::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_strict_rejects_unsupported_tokens() {
        assert_eq!(
            try_convert_to_postfix("1 + 2"),
            Err(ExprError::UnsupportedToken {
                token: ' ',
                position: 1
            })
        );
        assert_eq!(
            try_convert_to_postfix("(4)x"),
            Err(ExprError::UnsupportedToken {
                token: 'x',
                position: 3
            })
        );
    }

    #[test]
    fn test_nesting_beyond_capacity() {
        let deep = "((((((((((1))))))))))";

        assert_eq!(
            try_convert_to_postfix(deep),
            Err(ExprError::CapacityExceeded { capacity: 9 })
        );
        // the tenth '(' is dropped, so one ')' ends up without a partner
        assert_eq!(convert_to_postfix(deep), "1)");
    }

    #[test]
    fn test_permissive_mode_never_errors() {
        let deep = "((((((((((1))))))))))";
        for expression in ["3+4*2", "1+2)", "(1+2", "a b", deep, ""] {
            assert_eq!(
                convert_with_mode(expression, Mode::Permissive),
                Ok(convert_to_postfix(expression))
            );
        }
    }

    #[test]
    fn test_nine_pending_symbols_fit() {
        let nine = "(((((((((1)))))))))";
        assert_eq!(try_convert_to_postfix(nine).unwrap(), "1");
    }
}

//! Single-character token classification.

use std::fmt;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength: `*` and `/` bind tighter than `+` and `-`.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// `lhs <op> rhs` with overflow checking. Division truncates toward zero.
    pub fn checked_apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Div => lhs.checked_div(rhs),
        }
    }

    /// `lhs <op> rhs` with two's complement wrapping. `None` only for a zero divisor.
    pub fn wrapping_apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => Some(lhs.wrapping_add(rhs)),
            Operator::Sub => Some(lhs.wrapping_sub(rhs)),
            Operator::Mul => Some(lhs.wrapping_mul(rhs)),
            Operator::Div if rhs == 0 => None,
            Operator::Div => Some(lhs.wrapping_div(rhs)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classification of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A decimal digit with its numeric value.
    Digit(u8),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// Anything else. Passed through as an operand unless running strict.
    Other(char),
}

impl Token {
    pub fn classify(ch: char) -> Self {
        match ch {
            '0'..='9' => Token::Digit(ch as u8 - b'0'),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => Token::Other(ch),
            },
        }
    }

    /// True for the characters the converter routes through the operator stack.
    pub fn is_stack_symbol(self) -> bool {
        matches!(
            self,
            Token::Operator(_) | Token::LeftParen | Token::RightParen
        )
    }
}

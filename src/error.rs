use thiserror::Error;

/// Failure of a tagged stack operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// A push was attempted while every slot was taken.
    #[error("stack capacity of {capacity} exceeded")]
    Overflow { capacity: usize },
    /// A pop was attempted on an empty stack.
    #[error("stack underflow")]
    Underflow,
}

/// Errors reported while converting or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// More elements were pending than a stack can hold.
    #[error("expression needs more than {capacity} pending elements")]
    CapacityExceeded { capacity: usize },

    /// The expression or postfix sequence is structurally broken.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    /// A character outside `0-9 + - * / ( )`.
    #[error("unsupported token '{token}' at position {position}")]
    UnsupportedToken { token: char, position: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<StackError> for ExprError {
    fn from(err: StackError) -> Self {
        match err {
            StackError::Overflow { capacity } => ExprError::CapacityExceeded { capacity },
            StackError::Underflow => {
                ExprError::InvalidExpression("missing operand".to_string())
            }
        }
    }
}

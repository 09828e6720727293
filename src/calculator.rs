use crate::converter::convert_with_mode;
use crate::error::ExprError;
use crate::evaluator::evaluate_with_mode;
use crate::mode::Mode;
use std::fmt;
use tracing::debug;

/// Outcome of one convert-then-evaluate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub input: String,
    pub postfix: String,
    pub value: i64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} -- {}", self.input, self.postfix, self.value)
    }
}

/// Runs the infix to postfix converter followed by the postfix evaluator.
///
/// Example
/// ```
/// use postfix_calc::{Calculator, Mode};
///
/// let calc = Calculator::new(Mode::Strict);
/// let result = calc.calculate("5*(3+2)").unwrap();
/// assert_eq!(result.postfix, "532+*");
/// assert_eq!(result.value, 25);
/// assert_eq!(result.to_string(), "5*(3+2) -- 532+* -- 25");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    mode: Mode,
}

impl Calculator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn to_postfix(&self, expression: &str) -> Result<String, ExprError> {
        convert_with_mode(expression, self.mode)
    }

    pub fn evaluate(&self, postfix: &str) -> Result<i64, ExprError> {
        evaluate_with_mode(postfix, self.mode)
    }

    pub fn calculate(&self, expression: &str) -> Result<Calculation, ExprError> {
        let postfix = self.to_postfix(expression)?;
        let value = self.evaluate(&postfix)?;
        debug!(expression, %postfix, value, mode = %self.mode, "calculated");
        Ok(Calculation {
            input: expression.to_string(),
            postfix,
            value,
        })
    }
}

//! Single-digit infix calculator built on bounded stacks.
//!
//! The crate converts an infix expression over the digits `0`-`9` and the symbols
//! `+ - * / ( )` to postfix (reverse Polish) notation with a simplified shunting-yard
//! pass, then evaluates the postfix sequence with an operand stack. Both passes run
//! on a fixed-capacity [`stack::BoundedStack`].
//!
//! Every pass runs in one of two [`Mode`]s. [`Mode::Permissive`] keeps the classic
//! behavior of silently dropping elements pushed onto a full stack and reading `0`
//! from an empty one. [`Mode::Strict`] turns each of those conditions into an
//! [`ExprError`].
//!
//! The [`Interpreter`] wraps the calculator in a small line-oriented session with
//! `calc`, `postfix`, `eval`, `mode` and `exit` commands.

mod builtin;
pub mod calculator;
pub mod command;
pub mod converter;
pub mod error;
pub mod evaluator;
mod interpreter;
pub mod mode;
pub mod precedence;
pub mod session;
pub mod stack;
pub mod token;

pub use calculator::{Calculation, Calculator};
pub use converter::{convert_to_postfix, try_convert_to_postfix};
pub use error::{ExprError, StackError};
pub use evaluator::{evaluate, try_evaluate};
pub use mode::Mode;

/// Just a convenient re-export of the interactive session runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;

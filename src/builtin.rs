use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use crate::mode::Mode;
use crate::session::Session;
use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Built-in commands known to the session at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// against the session state.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "calc" or "mode".
    fn name() -> &'static str;

    /// Executes the command using the provided output stream and session.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        session: &mut Session,
    ) -> Result<ExitCode> {
        match <T as BuiltinCommand>::execute(*self, stdout, session) {
            Ok(x) => Ok(x),
            Err(e) => {
                writeln!(stdout, "{}: {:#}", T::name(), e)?;
                Ok(1)
            }
        }
    }
}

/// Output of `--help` or of an argument parse failure.
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", self.output.trim_end())?;
        Ok(if self.is_error { 1 } else { 0 })
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Convert an infix expression to postfix and evaluate it.
pub struct Calc {
    #[argh(positional, greedy)]
    /// expression to calculate; separate words are concatenated.
    pub expression: Vec<String>,
}

impl BuiltinCommand for Calc {
    fn name() -> &'static str {
        "calc"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let expression = self.expression.concat();
        let result = session
            .calculator()
            .calculate(&expression)
            .with_context(|| format!("can't calculate '{}'", expression))?;
        writeln!(stdout, "{}", result)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the postfix form of an infix expression.
pub struct Postfix {
    #[argh(positional, greedy)]
    /// expression to convert; separate words are concatenated.
    pub expression: Vec<String>,
}

impl BuiltinCommand for Postfix {
    fn name() -> &'static str {
        "postfix"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let postfix = session.calculator().to_postfix(&self.expression.concat())?;
        writeln!(stdout, "{}", postfix)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Evaluate a postfix sequence.
pub struct Eval {
    #[argh(positional, greedy)]
    /// postfix tokens; separate words are concatenated.
    pub postfix: Vec<String>,
}

impl BuiltinCommand for Eval {
    fn name() -> &'static str {
        "eval"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let value = session.calculator().evaluate(&self.postfix.concat())?;
        writeln!(stdout, "{}", value)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Show or change how malformed input is handled.
pub struct SetMode {
    #[argh(positional)]
    /// either "strict" or "permissive". Prints the current mode when omitted.
    pub mode: Option<String>,
}

impl BuiltinCommand for SetMode {
    fn name() -> &'static str {
        "mode"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        if let Some(name) = &self.mode {
            session.mode = name.parse::<Mode>()?;
        }
        writeln!(stdout, "mode: {}", session.mode)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Leave the interactive session.
pub struct Exit {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.should_exit = true;
        Ok(0)
    }
}

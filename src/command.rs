use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Conventional exit code type used by session commands.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Object-safe trait for any command that can be executed by the session.
///
/// Built-ins get it through a blanket impl in the `builtin` module.
pub trait ExecutableCommand {
    /// Executes the command, writing its report to `stdout`.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session)
    -> Result<ExitCode>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>>;
}

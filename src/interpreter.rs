use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::mode::Mode;
use crate::session::Session;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use tracing::debug;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the builtin commands defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Name of the command a line falls back to when its first word is not a command.
const FALLBACK_COMMAND: &str = "calc";

/// An interactive calculator session that dispatches lines to commands.
///
/// The interpreter owns a [`Session`] and a list of [`CommandFactory`] objects
/// that are queried to create commands by name. See [`Default`] for the built-in
/// factories included out of the box.
///
/// Example
/// ```
/// use postfix_calc::Interpreter;
/// let mut calc = Interpreter::default();
/// let mut out = Vec::new();
/// let code = calc.execute_line("3+4*2", &mut out).unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "3+4*2 -- 342*+ -- 11\n");
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>, mode: Mode) -> Self {
        Self {
            session: Session::new(mode),
            commands,
        }
    }

    /// Create an interpreter with the default commands, starting in `mode`.
    pub fn with_mode(mode: Mode) -> Self {
        let mut interpreter = Self::default();
        interpreter.session.mode = mode;
        interpreter
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a single command invocation by name with arguments, writing the
    /// command's report to `stdout`.
    ///
    /// Returns the command's exit code or an error if no command matches `name`.
    pub fn run_with_output(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let cmd = self
            .create(name, args)
            .ok_or_else(|| anyhow::anyhow!("command not found: {}", name))?;
        cmd.execute(stdout, &mut self.session)
    }

    /// Execute one line of input.
    ///
    /// The line is split on whitespace; when the first word is not a command the
    /// whole line is handed to `calc`. Blank lines succeed without output.
    pub fn execute_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(0);
        };

        let cmd = match self.create(name, args) {
            Some(cmd) => cmd,
            None => {
                // "--" keeps words such as "-" or "-1" from being read as flags
                let expression: Vec<&str> =
                    std::iter::once("--").chain(words.iter().copied()).collect();
                self.create(FALLBACK_COMMAND, &expression)
                    .ok_or_else(|| anyhow::anyhow!("command not found: {}", name))?
            }
        };
        debug!(line, "executing");
        cmd.execute(stdout, &mut self.session)
    }

    /// Read-Eval-Print Loop over standard input.
    pub fn repl(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();

        while !self.session.should_exit {
            let prompt = format!("calc[{}]> ", self.session.mode);
            match rl.readline(&prompt) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if let Err(err) = self.execute_line(&line, &mut stdout) {
                        println!("Error: {:#}", err);
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    fn create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        self.commands
            .iter()
            .find_map(|factory| factory.try_create(name, args))
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default set of commands:
    /// `calc`, `postfix`, `eval`, `mode` and `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(
            vec![
                Box::new(Factory::<Calc>::default()),
                Box::new(Factory::<Postfix>::default()),
                Box::new(Factory::<Eval>::default()),
                Box::new(Factory::<SetMode>::default()),
                Box::new(Factory::<Exit>::default()),
            ],
            Mode::default(),
        )
    }
}

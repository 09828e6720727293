use crate::calculator::Calculator;
use crate::mode::Mode;

/// Mutable state shared by the commands of one interactive session.
///
/// Note: fields are public to keep the command implementations short.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Rules applied by `calc`, `postfix` and `eval`.
    pub mode: Mode,
    /// When set to true, indicates that the read loop should stop.
    pub should_exit: bool,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            should_exit: false,
        }
    }

    /// A calculator configured with the session's current mode.
    pub fn calculator(&self) -> Calculator {
        Calculator::new(self.mode)
    }
}

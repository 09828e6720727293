use anyhow::Context;
use std::fmt;
use std::str::FromStr;

/// Name of the environment variable that selects the default [`Mode`].
pub const MODE_ENV_VAR: &str = "POSTFIX_CALC_MODE";

/// How the converter and evaluator react to malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Stack overflow drops the element, underflow yields a sentinel and unknown
    /// characters pass through as operands. Nothing but division by zero fails.
    #[default]
    Permissive,
    /// Every overflow, underflow, unbalanced parenthesis or unknown character is an error.
    Strict,
}

impl Mode {
    pub fn is_strict(self) -> bool {
        self == Mode::Strict
    }

    /// Pick the mode from the `--strict` flag and the value of [`MODE_ENV_VAR`].
    ///
    /// The flag wins over the variable; an unset variable means [`Mode::Permissive`].
    pub fn resolve(strict_flag: bool, env_value: Option<&str>) -> anyhow::Result<Self> {
        if strict_flag {
            return Ok(Mode::Strict);
        }
        match env_value {
            Some(value) => value
                .parse::<Mode>()
                .with_context(|| format!("invalid {}", MODE_ENV_VAR)),
            None => Ok(Mode::default()),
        }
    }

    /// [`Mode::resolve`] against the process environment.
    pub fn from_env(strict_flag: bool) -> anyhow::Result<Self> {
        let env_value = std::env::var(MODE_ENV_VAR).ok();
        Self::resolve(strict_flag, env_value.as_deref())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Mode::Permissive),
            "strict" => Ok(Mode::Strict),
            other => Err(anyhow::anyhow!(
                "unknown mode '{}', expected 'strict' or 'permissive'",
                other
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Permissive => write!(f, "permissive"),
            Mode::Strict => write!(f, "strict"),
        }
    }
}

use anyhow::Context;
use argh::FromArgs;
use postfix_calc::{Calculator, Interpreter, Mode};

#[derive(FromArgs)]
/// Convert single-digit infix expressions to postfix and evaluate them.
struct Args {
    #[argh(positional)]
    /// infix expression, e.g. "5*(3+2)". Starts an interactive session when omitted.
    expression: Option<String>,

    #[argh(switch)]
    /// reject malformed input instead of computing a best-effort result.
    strict: bool,

    #[argh(switch)]
    /// start an interactive session even when an expression is given.
    repl: bool,
}

/// Install a tracing subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=postfix_calc=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Args = argh::from_env();

    let mode = Mode::from_env(args.strict)?;

    match args.expression {
        Some(expression) if !args.repl => {
            let result = Calculator::new(mode)
                .calculate(&expression)
                .with_context(|| format!("can't calculate '{}'", expression))?;
            println!("{}", result);
            Ok(())
        }
        Some(expression) => {
            let mut interpreter = Interpreter::with_mode(mode);
            interpreter.execute_line(&expression, &mut std::io::stdout())?;
            interpreter.repl()
        }
        None => Interpreter::with_mode(mode).repl(),
    }
}

use clap::{Parser, Subcommand};
use condition_eval::cases::{report, run_cases, Case};
use condition_eval::{evaluate, from_json_str, Condition, Context};
use serde::de::DeserializeOwned;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate S-expression style conditions against a key/value context.
///
/// JSON arguments are inline text, or `@path` to read a file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one condition; prints `true` or `false`
    Eval {
        /// Condition tree, e.g. '["==", "$State", "Texas"]'
        condition: String,
        /// Context object, e.g. '{"State": "Texas"}'
        #[arg(default_value = "{}")]
        context: String,
    },
    /// Run a table of `[context, expected]` pairs; prints `<index> ok|FAIL`
    Cases {
        condition: String,
        cases: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: DeserializeOwned>(arg: &str) -> Result<T, String> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?,
        None => arg.to_string(),
    };
    from_json_str(&text).map_err(|e| e.to_string())
}

fn run(command: Command) -> Result<bool, String> {
    match command {
        Command::Eval { condition, context } => {
            let condition: Condition = read_json(&condition)?;
            let context: Context = read_json(&context)?;
            println!("{}", evaluate(&condition, &context));
            Ok(true)
        }
        Command::Cases { condition, cases } => {
            let condition: Condition = read_json(&condition)?;
            let cases: Vec<Case> = read_json(&cases)?;
            let outcomes = run_cases(&condition, &cases);
            if !outcomes.is_empty() {
                println!("{}", report(&outcomes));
            }
            Ok(outcomes.iter().all(|o| o.passed()))
        }
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments.
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

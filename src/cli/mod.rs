//! CLI module for the funcmap demo binary
//!
//! ## Commands
//!
//! - `list` - Print every builtin with its signature
//! - `call <NAME> [ARGS]...` - Invoke one builtin with command-line literals
//! - `demo` - Replay the stock demo calls
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::process;

use clap::{Parser, Subcommand};

/// Process exit status of a `funcmap` run. `demo` exits with `FAILURE` when a call is rejected by dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A rejected `list`/`call`/`demo` run: the rendered diagnostic for stderr plus the exit status.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Call named functions of different shapes through one registry
#[derive(Parser, Debug)]
#[command(name = "funcmap")]
#[command(version = VERSION)]
#[command(about = "Call named functions of different shapes through one registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every builtin with its signature
    List,

    /// Invoke a builtin
    Call {
        /// Registered name, e.g. `add`
        #[arg(value_name = "NAME")]
        name: String,
        /// Argument literals: `5`, `2.5`, `true`, `"quoted"`, or `kind:text` such as `str:5`
        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Replay the stock demo calls
    Demo,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let registry = crate::builtins::builtin_registry()
        .map_err(|err| CliError::failure(commands::render_diagnostic(err)))?;

    match cli.command {
        Command::List => {
            println!("{}", commands::render_listing(&registry));
            Ok(ExitCode::SUCCESS)
        }
        Command::Call { name, args } => {
            let output = commands::call_builtin(&registry, &name, &args)?;
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Demo => {
            let report = commands::run_demo(&registry);
            println!("{}", report.output);
            Ok(report.exit_code)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

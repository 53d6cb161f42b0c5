//! CLI command implementations
//!
//! All command functions return values or `CliResult` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;

use funcmap_core::literal::parse_literals;
use miette::Diagnostic;

use super::{CliError, CliResult, ExitCode};
use crate::builtins::demo_calls;
use crate::registry::Registry;

/// One line per registered callable, in registration order, e.g. `add(int, int) -> int`.
pub fn render_listing(registry: &Registry) -> String {
    registry
        .iter()
        .map(|descriptor| descriptor.info().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `args` as literals, invoke `name`, and render the result.
pub fn call_builtin(registry: &Registry, name: &str, args: &[String]) -> CliResult<String> {
    let values = parse_literals(args.iter().map(String::as_str))
        .map_err(|err| CliError::failure(format!("error: invalid argument literal: {err}")))?;
    tracing::debug!(callable = name, argc = values.len(), "calling builtin");

    let result = registry
        .invoke(name, values)
        .map_err(|err| CliError::failure(render_diagnostic(err)))?;
    Ok(result.to_string())
}

/// Output of `funcmap demo`.
#[derive(Debug)]
pub struct DemoReport {
    pub output: String,
    pub exit_code: ExitCode,
}

/// Replay the stock demo calls against `registry`.
///
/// Every call is attempted. A call that fails with the callable's own error is part of the demo and printed
/// inline; a dispatch error means the registry does not hold the builtins and fails the run.
pub fn run_demo(registry: &Registry) -> DemoReport {
    let mut output = String::new();
    let mut exit_code = ExitCode::SUCCESS;

    for (name, args) in demo_calls() {
        let rendered_args = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        let line = match registry.invoke(name, args) {
            Ok(result) => format!("{name}({rendered_args}) = {result}"),
            Err(err) if err.is_callable_error() => format!("{name}({rendered_args}) failed: {err}"),
            Err(err) => {
                exit_code = ExitCode::FAILURE;
                format!("{name}({rendered_args}) rejected: {err}")
            }
        };
        output.push_str(&line);
        output.push('\n');
    }

    DemoReport {
        output: output.trim_end().to_string(),
        exit_code,
    }
}

/// Plain-text rendering of a diagnostic: header with code, then its cause chain and help.
pub fn render_diagnostic(err: impl Diagnostic) -> String {
    let mut out = String::new();
    match err.code() {
        Some(code) => {
            let _ = write!(out, "error[{code}]: {err}");
        }
        None => {
            let _ = write!(out, "error: {err}");
        }
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, "\n  = cause: {cause}");
        source = cause.source();
    }
    if let Some(help) = err.help() {
        let _ = write!(out, "\n  = help: {help}");
    }
    out
}

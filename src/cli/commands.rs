use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};

use super::args::Cli;
use crate::config::Config;
use crate::error::BioctlError;
use crate::logging::OpLog;
use crate::operation::Operation;
use crate::tools::{describe_status, Invocation, Runner, Toolchain};

/// How a dispatch that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tool ran and exited 0
    Completed(Invocation),
    /// `--dry-run`: the tool would have run with this command line
    Planned(Invocation),
    /// `--help` or `--version` was printed
    Informational,
}

/// Run one bioctl command line (`argv[0]` included) after the privilege check.
///
/// Checks the subcommand is present, resolves both tools, validates the
/// arguments and runs exactly one tool through `runner`.
pub fn dispatch<R: Runner>(
    argv: &[OsString],
    config: &Config,
    oplog: &OpLog,
    runner: &R,
) -> Result<Outcome, BioctlError> {
    if argv.len() < 2 {
        return Err(BioctlError::usage("No subcommand given."));
    }

    let toolchain = Toolchain::locate(config)?;

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => return parse_failure(e, argv),
    };

    let operation = Operation::try_from(cli.command)?;
    let invocation = Invocation::new(toolchain.program(operation.tool()), operation.args());

    if cli.dry_run {
        return Ok(Outcome::Planned(invocation));
    }

    execute(&operation, invocation, oplog, runner)
}

/// Log the action, run the tool and turn anything but exit 0 into an error
pub fn execute<R: Runner>(
    operation: &Operation,
    invocation: Invocation,
    oplog: &OpLog,
    runner: &R,
) -> Result<Outcome, BioctlError> {
    oplog.info(operation.action());

    let detail = match runner.run(&invocation) {
        Ok(status) if status.success() => return Ok(Outcome::Completed(invocation)),
        Ok(status) => describe_status(status),
        Err(e) => format!("could not start {}: {}", invocation.program.display(), e),
    };

    Err(BioctlError::ToolFailed {
        message: operation.failure(),
        detail,
    })
}

fn parse_failure(err: clap::Error, argv: &[OsString]) -> Result<Outcome, BioctlError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            // Nothing useful to do if stdout is gone
            let _ = err.print();
            Ok(Outcome::Informational)
        }
        ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => argv[1].to_string_lossy().into_owned(),
            };
            Err(BioctlError::usage(format!("Unknown subcommand '{}'.", name)))
        }
        _ => Err(BioctlError::usage(first_line(&err.to_string()))),
    }
}

// clap renders "error: <what went wrong>" followed by its own usage block
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

//! Running mdadm and cryptsetup as child processes
//!
//! An [`Invocation`] is a program plus its exact argument vector; a [`Runner`]
//! executes it and reports how it ended.
use nix::sys::signal::Signal;
use std::fmt;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Exit codes for bioctl itself
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// One fully resolved external command: program plus argument vector.
///
/// Arguments are handed to the child as-is, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the process with inherited stdio, so passphrase prompts reach the terminal
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl fmt::Display for Invocation {
    /// Shell-quoted rendering, for display only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Runs an [`Invocation`] to completion
pub trait Runner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExitStatus>;
}

/// Spawns the real process and blocks until it exits
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExitStatus> {
        tracing::debug!(program = %invocation.program.display(), args = ?invocation.args, "spawning");
        let status = invocation.to_command().spawn()?.wait()?;
        tracing::debug!(status = %describe_status(status), "child finished");
        Ok(status)
    }
}

/// Human-readable account of how a child ended
pub fn describe_status(status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exit status {}", code);
    }
    match status.signal() {
        Some(sig) => match Signal::try_from(sig) {
            Ok(signal) => format!("terminated by {}", signal.as_str()),
            Err(_) => format!("terminated by signal {}", sig),
        },
        None => "unknown exit status".to_string(),
    }
}

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod operation;
pub mod privilege;
pub mod tools;
pub mod utils;

use std::ffi::OsString;

use cli::Outcome;
use config::Config;
use error::BioctlError;
use logging::OpLog;
use tools::executor::exit_codes;
use tools::Runner;

/// Entry point for the binary. Returns the process exit code.
pub fn run() -> i32 {
    logging::init_tracing();

    if let Err(e) = privilege::require_superuser() {
        return report_failure(&e, None);
    }

    let config = config::load_env_config();
    let argv: Vec<OsString> = std::env::args_os().collect();
    run_with(&argv, &config, &tools::SystemRunner)
}

/// Everything after the privilege check, with the configuration and runner supplied
pub fn run_with<R: Runner>(argv: &[OsString], config: &Config, runner: &R) -> i32 {
    let oplog = OpLog::new(&config.log_file);

    match cli::dispatch(argv, config, &oplog, runner) {
        Ok(Outcome::Planned(invocation)) => {
            println!("{}", invocation);
            exit_codes::SUCCESS
        }
        Ok(_) => exit_codes::SUCCESS,
        Err(e) => report_failure(&e, Some(&oplog)),
    }
}

/// The single failure path: stderr, ERROR log entry, usage banner, exit code
pub fn report_failure(err: &BioctlError, oplog: Option<&OpLog>) -> i32 {
    if !err.is_reported() {
        eprintln!("{}", err);
        return err.exit_code();
    }

    eprintln!("Error: {}", err);
    if let Some(oplog) = oplog {
        oplog.error(&err.to_string());
    }
    println!("{}", cli::usage_text());

    err.exit_code()
}

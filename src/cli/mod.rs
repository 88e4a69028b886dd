pub mod args;
pub mod commands;

pub use args::{usage_text, Cli, Commands, USAGE};
pub use commands::{dispatch, execute, Outcome};

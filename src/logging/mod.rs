pub mod diagnostics;
pub mod oplog;

pub use diagnostics::init_tracing;
pub use oplog::{format_line, LogLevel, OpLog};

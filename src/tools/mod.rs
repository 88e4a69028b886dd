pub mod executor;
pub mod resolve;

pub use executor::{describe_status, Invocation, Runner, SystemRunner};
pub use resolve::{find_executable, Tool, Toolchain};

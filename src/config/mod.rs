pub mod env;
pub mod schema;

pub use env::{load_config_from, load_env_config};
pub use schema::Config;

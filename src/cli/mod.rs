pub mod commands;
pub mod search;
pub mod serve;
pub mod setup;
pub mod start;

pub use commands::{Cli, Commands, LogFormat};

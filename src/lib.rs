pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod notify;
pub mod repl;
pub mod sequencer;
pub mod utils;

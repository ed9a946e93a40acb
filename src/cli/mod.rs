//! CLI command handlers

pub mod commands;

pub use commands::{init_logging, inspect, summarize};

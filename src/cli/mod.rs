//! Command-line interface.

pub mod args;

pub use args::{CheckArgs, Cli, Commands};

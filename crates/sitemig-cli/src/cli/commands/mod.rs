//! Subcommand implementations.

mod check;

pub use check::{run_check, ResolveMode};

//! CLI module
//!
//! Command-line interface for typegen.
//!
//! # Commands
//!
//! - `fetch` - fetch one JSON sample from a URL and emit its interfaces
//! - `infer` - infer interfaces from a local file or stdin
//! - `batch` - run every source in a manifest and merge the results
//! - `repl` - interactive session accumulating definitions across calls

mod commands;
mod repl;
mod runner;

pub use commands::{Cli, Commands};
pub use repl::Repl;
pub use runner::Runner;

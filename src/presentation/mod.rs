//! Presentation Layer
//!
//! Everything the binary needs around the use cases: argument parsing,
//! the usage listing, and diagnostic logging setup.

pub mod cli;
pub mod logging;
pub mod usage;

pub use cli::{Cli, Commands};
pub use usage::render_usage;

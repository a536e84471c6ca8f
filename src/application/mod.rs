//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//!
//! ## Use Cases
//!
//! - `Dispatcher` - Runs one action for one image across all of its hosts
//! - `update` / `start` / `stop` / `restart` / `status` - One entry point per action

pub mod dispatch;

pub use dispatch::{
    attribute, render_lines, restart, start, status, stop, update, DispatchReport, Dispatcher,
    ExecutionResult, ExecutionState,
};

//! Domain Services
//!
//! Stateless functions over the configuration model.

pub mod command_builder;
pub mod resolver;

pub use resolver::{resolve, ResolvedTarget};

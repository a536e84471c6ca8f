//! Value Objects
//!
//! Immutable types that are compared by value.

mod action;
mod container_state;

pub use action::{Action, FanOut};
pub use container_state::ContainerState;

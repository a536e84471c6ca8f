//! Domain Entities
//!
//! The configuration model: hosts grouped into clusters, and containers
//! that name the clusters they should run on.

mod cluster;
mod configuration;
mod container;
mod host;

pub use cluster::Cluster;
pub use configuration::Configuration;
pub use container::Container;
pub use host::{Host, DEFAULT_SSH_PORT};

//! Domain Layer
//!
//! Configuration model, action vocabulary and the pure functions that turn
//! an image into target hosts and remote commands.
//!
//! ## Structure
//!
//! - `entities/` - Host, Cluster, Container, Configuration
//! - `value_objects/` - Action, FanOut, ContainerState
//! - `services/` - Target resolution and command building
//! - `ports/` - The remote executor interface
//!
//! Nothing in here touches the network; all remote I/O goes through
//! [`ports::RemoteExecutor`].

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! Cluster entity - a named group of hosts

use serde::{Deserialize, Serialize};

use super::Host;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    #[serde(default)]
    pub hosts: Vec<Host>,
}

impl Cluster {
    pub fn new(name: impl Into<String>, hosts: Vec<Host>) -> Self {
        Self {
            name: name.into(),
            hosts,
        }
    }
}

//! Configuration entity - the full set of clusters and containers
//!
//! Loading from disk lives in `crate::config`; this type only answers
//! lookups and is treated as read-only once built.

use serde::{Deserialize, Serialize};

use super::{Cluster, Container};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub containers: Vec<Container>,
}

impl Configuration {
    pub fn new(clusters: Vec<Cluster>, containers: Vec<Container>) -> Self {
        Self {
            clusters,
            containers,
        }
    }

    /// Find a container by exact image match
    pub fn find_container(&self, image: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.image == image)
    }

    /// Clusters that should run `container`, in the container's declared order.
    ///
    /// Names without a matching cluster are skipped. Hosts are not
    /// deduplicated across clusters.
    pub fn clusters_for(&self, container: &Container) -> Vec<&Cluster> {
        container
            .clusters
            .iter()
            .flat_map(|name| self.clusters.iter().filter(move |c| &c.name == name))
            .collect()
    }
}

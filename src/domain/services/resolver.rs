//! Target resolution
//!
//! Maps an image to its container definition and the clusters that should
//! run it. Pure function of the configuration.

use crate::domain::entities::{Cluster, Configuration, Container, Host};
use crate::error::{ContainmentError, ContainmentResult};

/// A resolved image: its container and every cluster it runs on
#[derive(Debug, Clone)]
pub struct ResolvedTarget<'a> {
    pub container: &'a Container,
    pub clusters: Vec<&'a Cluster>,
}

impl<'a> ResolvedTarget<'a> {
    /// Every (cluster, host) pair in cluster-then-host declared order.
    ///
    /// A host listed by two clusters appears twice.
    pub fn hosts(&self) -> impl Iterator<Item = (&'a Cluster, &'a Host)> + '_ {
        self.clusters
            .iter()
            .flat_map(|&cluster| cluster.hosts.iter().map(move |host| (cluster, host)))
    }

    pub fn host_count(&self) -> usize {
        self.clusters.iter().map(|c| c.hosts.len()).sum()
    }
}

/// Resolve `image` against `configuration`.
///
/// Fails with `ContainerNotFound` when the image is not declared and with
/// `NoClustersForContainer` when none of its cluster names match or the
/// matching clusters declare no hosts.
pub fn resolve<'a>(
    configuration: &'a Configuration,
    image: &str,
) -> ContainmentResult<ResolvedTarget<'a>> {
    let container = configuration
        .find_container(image)
        .ok_or_else(|| ContainmentError::ContainerNotFound(image.to_string()))?;

    let target = ResolvedTarget {
        container,
        clusters: configuration.clusters_for(container),
    };
    if target.host_count() == 0 {
        return Err(ContainmentError::NoClustersForContainer(image.to_string()));
    }
    Ok(target)
}

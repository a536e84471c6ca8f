//! Container entity - an image and where it should run

use serde::{Deserialize, Serialize};

/// A docker image declared in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Container {
    /// Image reference, unique within a configuration
    pub image: String,
    /// Names of the clusters that should run this image, in declared order
    #[serde(default)]
    pub clusters: Vec<String>,
    /// `host:container` port mappings, in declared order
    #[serde(default)]
    pub ports: Vec<String>,
}

impl Container {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_clusters<I, S>(mut self, clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clusters = clusters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ports<I, S>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ports = ports.into_iter().map(Into::into).collect();
        self
    }

    /// Remote docker container name derived from the image.
    ///
    /// `/` becomes `-`, then anything outside `[A-Za-z0-9_.-]` is dropped.
    pub fn name(&self) -> String {
        self.image
            .replace('/', "-")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
            .collect()
    }
}

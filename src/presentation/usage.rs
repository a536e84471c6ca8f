//! Usage listing shown when no action is given

use std::fmt::Write;

use crate::domain::entities::Configuration;
use crate::domain::value_objects::Action;

/// Usage lines followed by the images and clusters in `configuration`
pub fn render_usage(configuration: &Configuration) -> String {
    let mut out = String::from("Usage:\n");
    for action in Action::ALL {
        let _ = writeln!(out, "  containment {action} IMAGE");
    }

    out.push_str("\nImages:\n");
    for container in &configuration.containers {
        let _ = writeln!(out, "  {}", container.image);
    }

    out.push_str("\nClusters:\n");
    for cluster in &configuration.clusters {
        let _ = writeln!(out, "  {}", cluster.name);
    }
    out
}

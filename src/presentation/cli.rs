//! CLI Argument Parsing
//!
//! Global flags (`--config`, `--verbose`) are inherited by all subcommands.
//! Running without a subcommand prints usage plus the configured images and
//! clusters.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Action;

/// Containment - run docker actions on every host that should run an image
#[derive(Parser, Debug)]
#[command(name = "containment")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $CONTAINMENT_CONFIG, then ./containment.yml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show whether the container is running on each host
    Status {
        /// Image as declared in the configuration
        image: String,
    },
    /// Pull the image on each host
    Update {
        /// Image as declared in the configuration
        image: String,
    },
    /// Run the container on each host
    Start {
        /// Image as declared in the configuration
        image: String,
    },
    /// Stop and remove the container on each host
    Stop {
        /// Image as declared in the configuration
        image: String,
    },
    /// Stop, remove and run the container again on each host
    Restart {
        /// Image as declared in the configuration
        image: String,
    },
}

impl Commands {
    pub fn action(&self) -> Action {
        match self {
            Commands::Status { .. } => Action::Status,
            Commands::Update { .. } => Action::Update,
            Commands::Start { .. } => Action::Start,
            Commands::Stop { .. } => Action::Stop,
            Commands::Restart { .. } => Action::Restart,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            Commands::Status { image }
            | Commands::Update { image }
            | Commands::Start { image }
            | Commands::Stop { image }
            | Commands::Restart { image } => image,
        }
    }
}

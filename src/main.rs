//! Containment CLI
//!
//! Usage: containment [OPTIONS] [COMMAND] IMAGE
//!
//! Commands:
//!   status   Show whether the container is running on each host
//!   update   Pull the image on each host
//!   start    Run the container on each host
//!   stop     Stop and remove the container on each host
//!   restart  Stop, remove and run the container again on each host

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use containment::config::config_path;
use containment::presentation::{logging, render_usage, Cli};
use containment::{Configuration, Dispatcher, SshExecutor};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let path = config_path(cli.config.as_deref());
    let configuration = Configuration::load(&path)?;

    let Some(command) = cli.command else {
        print!("{}", render_usage(&configuration));
        return Ok(());
    };

    let executor = SshExecutor::from_env().context("couldn't create ssh control directory")?;
    let dispatcher = Dispatcher::new(executor, io::stdout());

    dispatcher.dispatch(command.action(), &configuration, command.image())?;

    Ok(())
}

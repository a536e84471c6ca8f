//! Remote command construction
//!
//! Every docker invocation is prefixed with [`PRIVILEGE_PREFIX`]; the remote
//! user is expected to be allowed to run docker through it.

use crate::domain::entities::Container;
use crate::domain::value_objects::Action;

/// Prefix applied to every docker invocation
pub const PRIVILEGE_PREFIX: &str = "sudo";

/// Build the shell command that performs `action` for `container`.
pub fn build(action: Action, container: &Container) -> String {
    match action {
        Action::Status => docker(&format!(
            "inspect -f '{{{{.State.Running}}}}' {}",
            container.name()
        )),
        Action::Update => docker(&format!("pull {}", container.image)),
        Action::Start => run(container),
        Action::Stop => stop(container),
        Action::Restart => format!("{} && {}", stop(container), run(container)),
    }
}

fn docker(args: &str) -> String {
    format!("{PRIVILEGE_PREFIX} docker {args}")
}

fn run(container: &Container) -> String {
    let mut args = format!("run -d --name {}", container.name());
    for port in &container.ports {
        args.push_str(" -p ");
        args.push_str(port);
    }
    args.push(' ');
    args.push_str(&container.image);
    docker(&args)
}

fn stop(container: &Container) -> String {
    let name = container.name();
    format!(
        "{} && {}",
        docker(&format!("stop {name}")),
        docker(&format!("rm {name}"))
    )
}

//! Configuration for Containment
//!
//! Configuration is loaded from (in order of priority):
//! 1. The `--config` flag
//! 2. The `CONTAINMENT_CONFIG` environment variable
//! 3. `containment.yml` in the working directory
//!
//! ```yaml
//! clusters:
//!   - name: web
//!     hosts:
//!       - address: 10.0.0.1
//!         port: 22
//!         user: deploy
//! containers:
//!   - image: acme/web
//!     clusters: [web]
//!     ports: ["80:8080"]
//! ```

mod loader;

pub use loader::{config_path, CONFIG_ENV, DEFAULT_CONFIG_FILE};

//! Console entry point for the roster engine.

use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roster_engine::config::{RosterPolicy, load_policy};
use roster_engine::console::menu;
use roster_engine::roster::Roster;

const DEFAULT_POLICY_PATH: &str = "./config/roster/policy.yaml";

fn main() -> io::Result<()> {
    // diagnostics go to stderr so the interactive session stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let policy_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_POLICY_PATH.to_string());

    let policy = match load_policy(&policy_path) {
        Ok(policy) => {
            info!(path = %policy_path, "loaded roster policy");
            policy
        }
        Err(err) => {
            warn!(path = %policy_path, %err, "using default roster policy");
            RosterPolicy::default()
        }
    };

    let mut roster = Roster::with_policy(policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut roster, &mut stdin.lock(), &mut stdout.lock())
}

//! Admission policy configuration for the roster engine.
//!
//! The roster clamps incoming hours and salaries against a [`RosterPolicy`].
//! The policy has compiled-in defaults and can be overridden from a YAML
//! file.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::load_policy;
//!
//! let policy = load_policy("./config/roster/policy.yaml").unwrap();
//! println!("Hours admitted up to {}", policy.max_weekly_hours);
//! ```

mod loader;
mod types;

pub use loader::load_policy;
pub use types::{PolicyFile, RosterPolicy};

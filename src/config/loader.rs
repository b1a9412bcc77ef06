//! Policy configuration loading.
//!
//! This module reads the roster admission policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};

use super::types::{PolicyFile, RosterPolicy};

/// Loads the admission policy from a YAML file.
///
/// The file carries a single `policy` section:
///
/// ```text
/// policy:
///   min_weekly_hours: 0
///   max_weekly_hours: 80
///   min_salary: 17000
/// ```
///
/// # Arguments
///
/// * `path` - Path to the policy file (e.g., "./config/roster/policy.yaml")
///
/// # Returns
///
/// Returns the parsed [`RosterPolicy`], or an error if:
/// - The file is missing (`PolicyNotFound`)
/// - The file contains invalid YAML or is missing fields (`PolicyParseError`)
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::load_policy;
///
/// let policy = load_policy("./config/roster/policy.yaml")?;
/// println!("Minimum salary: {}", policy.min_salary);
/// # Ok::<(), roster_engine::error::RosterError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> RosterResult<RosterPolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| RosterError::PolicyNotFound {
        path: path_str.clone(),
    })?;

    let file: PolicyFile =
        serde_yaml::from_str(&content).map_err(|e| RosterError::PolicyParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    Ok(file.policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_policy_file() {
        let policy = load_policy("./config/roster/policy.yaml").unwrap();

        assert_eq!(policy, RosterPolicy::default());
        assert_eq!(policy.min_salary, dec("17000"));
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = load_policy("/nonexistent/policy.yaml");

        match result.unwrap_err() {
            RosterError::PolicyNotFound { path } => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected PolicyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = std::env::temp_dir().join("roster_engine_bad_policy.yaml");
        fs::write(&path, "policy: [not, a, mapping]").unwrap();

        let result = load_policy(&path);

        match result.unwrap_err() {
            RosterError::PolicyParseError { path: p, .. } => {
                assert!(p.contains("roster_engine_bad_policy.yaml"));
            }
            other => panic!("Expected PolicyParseError, got {:?}", other),
        }

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_field_returns_parse_error() {
        let path = std::env::temp_dir().join("roster_engine_partial_policy.yaml");
        fs::write(&path, "policy:\n  min_salary: 17000\n").unwrap();

        let result = load_policy(&path);

        assert!(matches!(
            result,
            Err(RosterError::PolicyParseError { .. })
        ));

        fs::remove_file(&path).ok();
    }
}

//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::{Config, Rule};
use crate::error::{ConfigError, ConfigResult};
use globset::Glob;
use regex::Regex;

/// Template variables a rule dir may reference
const KNOWN_VARIABLES: &[&str] = &["variant", "suffix", "task", "marker"];

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    for (name, rule) in &config.rules {
        validate_rule(name, rule)?;
    }

    Ok(())
}

/// Validate a single rule
pub fn validate_rule(name: &str, rule: &Rule) -> ConfigResult<()> {
    if rule.marker.is_empty() {
        return Err(ConfigError::EmptyMarker(name.to_string()));
    }

    // The match pattern must be a valid glob
    if let Err(e) = Glob::new(&rule.pattern()) {
        return Err(ConfigError::InvalidPattern {
            rule: name.to_string(),
            error: e.to_string(),
        });
    }

    // The placeholder file name is a single path segment
    if rule.file.is_empty() || rule.file.contains('/') || rule.file.contains('\\') {
        return Err(ConfigError::FileWithSeparator {
            rule: name.to_string(),
            file: rule.file.clone(),
        });
    }

    validate_template(name, &rule.dir)?;

    Ok(())
}

/// Check that a dir template only references rule-derived variables
///
/// Upper-case names are left alone so templates can still pull from the
/// process environment at seed time.
fn validate_template(rule_name: &str, template: &str) -> ConfigResult<()> {
    let re = Regex::new(r"\$\{([^}]*)\}").unwrap();

    for caps in re.captures_iter(template) {
        let var = &caps[1];
        if var.is_empty() {
            return Err(ConfigError::InvalidTemplate {
                rule: rule_name.to_string(),
                error: "empty variable name".to_string(),
            });
        }
        if KNOWN_VARIABLES.contains(&var) {
            continue;
        }
        if var.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
            continue;
        }
        return Err(ConfigError::InvalidTemplate {
            rule: rule_name.to_string(),
            error: format!("unknown variable '{}'", var),
        });
    }

    Ok(())
}

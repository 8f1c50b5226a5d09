//! Variable interpolation for dir templates
//!
//! This module handles replacing `${var}` references in rule dir templates.
//! Rule-derived variables win over process environment variables, and any
//! name that resolves to neither is an error: a partially-resolved template
//! would silently seed the wrong path.

use crate::error::{SeedError, SeedResult};
use regex::Regex;
use std::collections::HashMap;
use std::env;

/// Interpolate variables in a template string
///
/// Supports:
/// - `${var}` - variable from the provided map
/// - Environment variables (when not found in the map)
///
/// Errors on any variable found in neither.
pub fn interpolate(template: &str, task: &str, vars: &HashMap<String, String>) -> SeedResult<String> {
    // Regex to match ${var} patterns
    let re = Regex::new(r"\$\{([^}]*)\}").unwrap();

    let mut unresolved = None;

    let result = re
        .replace_all(template, |caps: &regex::Captures| {
            let var_name = &caps[1];

            if let Some(value) = vars.get(var_name) {
                return value.clone();
            }

            if let Ok(value) = env::var(var_name) {
                return value;
            }

            if unresolved.is_none() {
                unresolved = Some(var_name.to_string());
            }
            String::new()
        })
        .to_string();

    match unresolved {
        Some(name) => Err(SeedError::Template {
            task: task.to_string(),
            error: format!("variable '{}' is not defined", name),
        }),
        None => Ok(result),
    }
}

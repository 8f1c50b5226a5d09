//! Core configuration types
//!
//! This module defines the data structures that represent a preseed.yml
//! configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default payload written when a rule does not specify one: an empty JSON
/// object, which satisfies consumers that only require the file to parse.
pub const DEFAULT_PAYLOAD: &str = "{}";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Build-intermediates root all rule dirs are resolved under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Interpreter used by `preseed run` for task bodies (e.g. ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Seed rules, keyed by rule name
    #[serde(default)]
    pub rules: HashMap<String, Rule>,
}

/// A seed rule definition
///
/// A rule selects tasks by name and describes where the placeholder for each
/// selected task goes. The dir template may reference `${variant}`,
/// `${suffix}` and `${task}`, all derived from the task name and the marker.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rule {
    /// Marker substring that must appear in the task name and is stripped
    /// out to derive the variant (e.g. "extractDeepLinks")
    pub marker: String,

    /// Glob matched against the full task name; defaults to "*<marker>*"
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,

    /// Directory template relative to the root, interpolated per task
    pub dir: String,

    /// Placeholder file name created inside the computed directory
    pub file: String,

    /// Placeholder content; defaults to an empty JSON object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl Rule {
    /// The glob pattern this rule matches task names against
    pub fn pattern(&self) -> String {
        match &self.match_pattern {
            Some(p) => p.clone(),
            None => format!("*{}*", self.marker),
        }
    }

    /// The placeholder content for this rule
    pub fn payload(&self) -> &str {
        self.payload.as_deref().unwrap_or(DEFAULT_PAYLOAD)
    }
}

impl Config {
    /// The build root, defaulting to "build"
    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or("build")
    }
}

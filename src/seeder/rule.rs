//! Artifact path rules
//!
//! A rule maps a task name to the path of the input artifact that task
//! expects. The mapping is a pure string transformation: strip the marker
//! substring from the task name, lower-case the first remaining character to
//! get the variant, and interpolate variant/suffix/task into a dir template
//! under the build root.
//!
//! For the observed deep-link case, task `extractDeepLinksDebug` with marker
//! `extractDeepLinks` yields suffix `Debug`, variant `debug` and dir
//! `intermediates/navigation_json/debug/extractDeepLinksDebug`.

use crate::config::{self, validate_rule};
use crate::error::{ConfigResult, SeedResult};
use crate::seeder::interpolate::interpolate;
use globset::{Glob, GlobMatcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Remove every occurrence of the marker from a task name
///
/// Returns `None` when the name does not contain the marker at all, i.e. the
/// rule does not apply to this task.
pub fn strip_marker(name: &str, marker: &str) -> Option<String> {
    if marker.is_empty() || !name.contains(marker) {
        return None;
    }
    Some(name.replace(marker, ""))
}

/// Lower-case the first character of a string, leaving the rest untouched
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A rule compiled from configuration into its runtime form
///
/// This differs from `config::Rule` by carrying the compiled glob matcher,
/// the payload as bytes and the resolved build root.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Rule name from the configuration
    pub name: String,

    /// Marker substring stripped from task names
    pub marker: String,

    /// Placeholder file name
    pub file: String,

    /// Placeholder content
    pub payload: Vec<u8>,

    matcher: GlobMatcher,
    dir_template: String,
    root: PathBuf,
}

impl CompiledRule {
    /// Compile a rule from configuration
    pub fn compile(name: &str, rule: &config::Rule, root: &Path) -> ConfigResult<Self> {
        validate_rule(name, rule)?;

        // validate_rule already proved the pattern compiles
        let matcher = Glob::new(&rule.pattern())
            .expect("pattern validated")
            .compile_matcher();

        Ok(CompiledRule {
            name: name.to_string(),
            marker: rule.marker.clone(),
            file: rule.file.clone(),
            payload: rule.payload().as_bytes().to_vec(),
            matcher,
            dir_template: rule.dir.clone(),
            root: root.to_path_buf(),
        })
    }

    /// Check whether this rule applies to a task name
    pub fn matches(&self, task: &str) -> bool {
        self.matcher.is_match(task) && task.contains(&self.marker)
    }

    /// Compute the target placeholder path for a task name
    ///
    /// Returns `Ok(None)` when the rule does not apply to the task. The
    /// computation is deterministic: the same task name always yields the
    /// same path.
    pub fn target_path(&self, task: &str) -> SeedResult<Option<PathBuf>> {
        if !self.matcher.is_match(task) {
            return Ok(None);
        }
        let suffix = match strip_marker(task, &self.marker) {
            Some(s) => s,
            None => return Ok(None),
        };

        let mut vars = HashMap::new();
        vars.insert("suffix".to_string(), suffix.clone());
        vars.insert("variant".to_string(), lowercase_first(&suffix));
        vars.insert("task".to_string(), format!("{}{}", self.marker, suffix));
        vars.insert("marker".to_string(), self.marker.clone());

        let dir = interpolate(&self.dir_template, task, &vars)?;

        Ok(Some(self.root.join(dir).join(&self.file)))
    }
}

/// Compile every rule in a configuration, in stable name order
pub fn compile_rules(config: &config::Config, root: &Path) -> ConfigResult<Vec<CompiledRule>> {
    let mut names: Vec<&String> = config.rules.keys().collect();
    names.sort();

    let mut rules = Vec::with_capacity(names.len());
    for name in names {
        let rule = &config.rules[name];
        rules.push(CompiledRule::compile(name, rule, root)?);
    }

    Ok(rules)
}

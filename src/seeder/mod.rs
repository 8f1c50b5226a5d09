//! Pre-task artifact seeding
//!
//! This module ties the pieces together: a predicate picks tasks out of the
//! graph by name, a path rule maps each picked task to the artifact path it
//! expects, and a pre-action writes a constant placeholder there unless a
//! file already exists.

pub mod interpolate;
pub mod rule;
pub mod seed;

// Re-export main types
pub use rule::{compile_rules, CompiledRule};
pub use seed::{ensure_placeholder, SeedOutcome};

use crate::graph::TaskGraph;
use std::path::PathBuf;
use std::rc::Rc;

/// Install a seeder on the graph
///
/// For every task whose name satisfies `predicate`, a pre-action is attached
/// that computes `path_rule(name)` and ensures a file with `payload` exists
/// there before the task body runs. Both functions must be pure; the payload
/// is a constant default artifact for the consuming task.
pub fn install_seeder<P, R>(
    graph: &mut TaskGraph,
    predicate: P,
    path_rule: R,
    payload: impl Into<Vec<u8>>,
) where
    P: Fn(&str) -> bool + 'static,
    R: Fn(&str) -> PathBuf + 'static,
{
    let path_rule = Rc::new(path_rule);
    let payload: Rc<[u8]> = Rc::from(payload.into());

    graph.when_task_added(move |task| {
        if !predicate(task.name()) {
            return;
        }

        let path_rule = Rc::clone(&path_rule);
        let payload = Rc::clone(&payload);
        task.do_first(move |descriptor| {
            let target = path_rule(descriptor.name());
            ensure_placeholder(&target, &payload).map(|_| ())
        });
    });
}

/// Install every compiled rule on the graph as a seeder
pub fn install_rules(graph: &mut TaskGraph, rules: &[CompiledRule]) {
    for rule in rules {
        let rule = rule.clone();
        graph.when_task_added(move |task| {
            if !rule.matches(task.name()) {
                return;
            }

            let rule = rule.clone();
            task.do_first(move |descriptor| {
                match rule.target_path(descriptor.name())? {
                    Some(target) => ensure_placeholder(&target, &rule.payload).map(|_| ()),
                    None => Ok(()),
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_install_seeder_creates_placeholder_before_body() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        let mut graph = TaskGraph::new();
        let rule_root = root.clone();
        install_seeder(
            &mut graph,
            |name| name.contains("extractDeepLinks"),
            move |name| rule_root.join(name).join("navigation.json"),
            "{}",
        );

        let expected = root.join("extractDeepLinksDebug/navigation.json");
        let probe = expected.clone();
        graph.register_with_action("extractDeepLinksDebug", move |_| {
            // The body must observe the seeded file
            assert!(probe.exists());
            Ok(())
        });

        graph.run("extractDeepLinksDebug").unwrap();
        assert_eq!(fs::read_to_string(&expected).unwrap(), "{}");
    }

    #[test]
    fn test_install_seeder_skips_non_matching_tasks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        let mut graph = TaskGraph::new();
        let rule_root = root.clone();
        install_seeder(
            &mut graph,
            |name| name.contains("extractDeepLinks"),
            move |name| rule_root.join(name).join("navigation.json"),
            "{}",
        );

        graph.register("compileDebugSources");
        graph.run("compileDebugSources").unwrap();

        // Nothing was created for the unmatched task
        assert!(fs::read_dir(&root).unwrap().next().is_none());
    }

    #[test]
    fn test_install_rules_seeds_each_variant_independently() {
        let temp_dir = TempDir::new().unwrap();

        let yaml = r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/navigation_json/${variant}/${task}
    file: navigation.json
"#;
        let config: config::Config = serde_yaml::from_str(yaml).unwrap();
        let rules = compile_rules(&config, temp_dir.path()).unwrap();

        let mut graph = TaskGraph::new();
        install_rules(&mut graph, &rules);

        graph.register("extractDeepLinksDebug");
        graph.register("extractDeepLinksRelease");
        graph.run("extractDeepLinksDebug").unwrap();
        graph.run("extractDeepLinksRelease").unwrap();

        let debug = temp_dir.path().join(
            "intermediates/navigation_json/debug/extractDeepLinksDebug/navigation.json",
        );
        let release = temp_dir.path().join(
            "intermediates/navigation_json/release/extractDeepLinksRelease/navigation.json",
        );
        assert_eq!(fs::read_to_string(debug).unwrap(), "{}");
        assert_eq!(fs::read_to_string(release).unwrap(), "{}");
    }

    #[test]
    fn test_install_rules_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();

        let existing = temp_dir
            .path()
            .join("intermediates/navigation_json/debug/extractDeepLinksDebug");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("navigation.json"), r#"{"route":"x"}"#).unwrap();

        let yaml = r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/navigation_json/${variant}/${task}
    file: navigation.json
"#;
        let config: config::Config = serde_yaml::from_str(yaml).unwrap();
        let rules = compile_rules(&config, temp_dir.path()).unwrap();

        let mut graph = TaskGraph::new();
        install_rules(&mut graph, &rules);
        graph.register("extractDeepLinksDebug");
        graph.run("extractDeepLinksDebug").unwrap();

        assert_eq!(
            fs::read_to_string(existing.join("navigation.json")).unwrap(),
            r#"{"route":"x"}"#
        );
    }

    #[test]
    fn test_running_twice_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();

        let yaml = r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/navigation_json/${variant}/${task}
    file: navigation.json
"#;
        let config: config::Config = serde_yaml::from_str(yaml).unwrap();
        let rules = compile_rules(&config, temp_dir.path()).unwrap();

        let mut graph = TaskGraph::new();
        install_rules(&mut graph, &rules);
        graph.register("extractDeepLinksDebug");
        graph.run("extractDeepLinksDebug").unwrap();
        graph.run("extractDeepLinksDebug").unwrap();

        let target = temp_dir.path().join(
            "intermediates/navigation_json/debug/extractDeepLinksDebug/navigation.json",
        );
        assert_eq!(fs::read_to_string(target).unwrap(), "{}");
    }
}

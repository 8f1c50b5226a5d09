//! Common test utilities

use std::fs;
use tempfile::TempDir;

/// Create a temporary directory with a preseed.yml file
pub fn create_test_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preseed.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// The deep-link rule as observed in the wild
pub const DEEP_LINKS_CONFIG: &str = r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/navigation_json/${variant}/${task}
    file: navigation.json
"#;

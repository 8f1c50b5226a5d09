//! Preseed - a pre-task placeholder artifact seeder
//!
//! Preseed watches a build task registry and, just before a task whose name
//! matches a configured rule runs, makes sure the input artifact that task
//! expects exists on disk, writing a minimal placeholder if it is absent.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod runner;
pub mod seeder;
pub mod ui;

// Re-export commonly used types
pub use error::{PreseedError, Result};

/// Current version of Preseed
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

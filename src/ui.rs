//! Terminal output
//!
//! Verbosity-gated status reporting on stderr, so command output on stdout
//! stays clean for scripting.

use crate::seeder::SeedOutcome;
use colored::Colorize;
use std::path::Path;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// Output handle carrying the chosen verbosity
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    pub verbosity: Verbosity,
}

impl Ui {
    pub fn new(verbosity: Verbosity) -> Self {
        Ui { verbosity }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "error:".red().bold(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "debug:".dimmed(), message);
        }
    }

    /// Report a seed outcome for a target path
    pub fn seed_outcome(&self, target: &Path, outcome: SeedOutcome) {
        match outcome {
            SeedOutcome::Created => {
                self.info(&format!("{} {}", "seeded".green(), target.display()));
            }
            SeedOutcome::AlreadyPresent => {
                self.debug(&format!("{} {}", "present".yellow(), target.display()));
            }
        }
    }

    /// Report a computed target during a dry run
    pub fn check_target(&self, task: &str, target: &Path, exists: bool) {
        let status = if exists {
            "exists".yellow()
        } else {
            "would seed".cyan()
        };
        self.info(&format!("{} {} -> {}", status, task, target.display()));
    }

    /// Report a task starting
    pub fn task_start(&self, task: &str) {
        self.info(&format!("{} {}", "running".cyan(), task));
    }
}

impl Default for Ui {
    fn default() -> Self {
        Ui::new(Verbosity::Normal)
    }
}

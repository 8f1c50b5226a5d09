//! Task body execution
//!
//! `preseed run` wraps an arbitrary shell command as the body of a
//! registered task, so the seeding hooks demonstrably complete before the
//! command starts.

use crate::error::{ExecutionError, ExecutionResult};
use std::process::{Command as StdCommand, Stdio};

/// Default interpreter when the configuration does not specify one
pub const DEFAULT_INTERPRETER: &[&str] = &["sh", "-c"];

/// Execute a command string through the given interpreter
pub fn execute_command(cmd: &str, interpreter: &[String]) -> ExecutionResult<()> {
    let (program, args) = interpreter
        .split_first()
        .ok_or_else(|| ExecutionError::Spawn(std::io::Error::other("empty interpreter")))?;

    let mut command = StdCommand::new(program);
    command.args(args);
    command.arg(cmd);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().map_err(ExecutionError::Spawn)?;

    if !status.success() {
        return Err(ExecutionError::CommandFailed(status.code()));
    }

    Ok(())
}

/// Resolve the interpreter vector from configuration
pub fn resolve_interpreter(configured: Option<&Vec<String>>) -> Vec<String> {
    match configured {
        Some(v) if !v.is_empty() => v.clone(),
        _ => DEFAULT_INTERPRETER.iter().map(|s| s.to_string()).collect(),
    }
}

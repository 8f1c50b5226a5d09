//! Registered task representation
//!
//! A task here is only what the seeder needs to see of the host build
//! system's tasks: a name, the pre-actions attached to it, and an optional
//! body.

use crate::error::{ExecutionResult, SeedResult};

/// Identifies a task by name at registration time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    name: String,
}

impl TaskDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        TaskDescriptor { name: name.into() }
    }

    /// Task name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A hook that runs before the task body
pub type PreAction = Box<dyn Fn(&TaskDescriptor) -> SeedResult<()>>;

/// The task body itself
pub type TaskAction = Box<dyn Fn(&TaskDescriptor) -> ExecutionResult<()>>;

/// A task known to the graph, with its attached hooks
pub struct RegisteredTask {
    descriptor: TaskDescriptor,
    pre_actions: Vec<PreAction>,
    action: Option<TaskAction>,
}

impl RegisteredTask {
    /// Create a task with no hooks and no body
    pub fn new(name: impl Into<String>) -> Self {
        RegisteredTask {
            descriptor: TaskDescriptor::new(name),
            pre_actions: Vec::new(),
            action: None,
        }
    }

    /// Task name
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Task descriptor
    pub fn descriptor(&self) -> &TaskDescriptor {
        &self.descriptor
    }

    /// Attach a hook that runs before the task body
    ///
    /// The most recently attached hook runs first, before any previously
    /// attached hooks and before the body.
    pub fn do_first(&mut self, hook: impl Fn(&TaskDescriptor) -> SeedResult<()> + 'static) {
        self.pre_actions.insert(0, Box::new(hook));
    }

    /// Set the task body
    pub fn set_action(&mut self, action: impl Fn(&TaskDescriptor) -> ExecutionResult<()> + 'static) {
        self.action = Some(Box::new(action));
    }

    /// Number of attached pre-actions
    pub fn pre_action_count(&self) -> usize {
        self.pre_actions.len()
    }

    /// Run every pre-action, then the body
    ///
    /// All pre-actions complete strictly before the body starts; the first
    /// pre-action error aborts the task.
    pub fn run(&self) -> crate::error::Result<()> {
        for pre_action in &self.pre_actions {
            pre_action(&self.descriptor)?;
        }

        if let Some(action) = &self.action {
            action(&self.descriptor)?;
        }

        Ok(())
    }
}

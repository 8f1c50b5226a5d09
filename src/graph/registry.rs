//! Task registry with observer hooks
//!
//! The graph does not own scheduling; it is the point where a host build
//! system hands task registrations to observers, which may attach
//! pre-actions to individual tasks. Observers are plain callbacks, not
//! framework subclasses.

use crate::error::{ExecutionError, ExecutionResult, Result, SeedResult};
use crate::graph::task::{RegisteredTask, TaskDescriptor};

/// Callback invoked once per task with a mutable handle
pub type TaskObserver = Box<dyn Fn(&mut RegisteredTask)>;

/// A registry of build tasks and the observers watching it
#[derive(Default)]
pub struct TaskGraph {
    observers: Vec<TaskObserver>,
    tasks: Vec<RegisteredTask>,
}

impl TaskGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        TaskGraph {
            observers: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Install an observer
    ///
    /// The observer sees every task: those already registered are replayed
    /// immediately, and every later registration is forwarded as it happens.
    /// Installation order therefore cannot drop tasks. An observer that
    /// never matches anything simply never attaches a hook; that is not an
    /// error.
    pub fn when_task_added(&mut self, observer: impl Fn(&mut RegisteredTask) + 'static) {
        for task in &mut self.tasks {
            observer(task);
        }
        self.observers.push(Box::new(observer));
    }

    /// Register a task with no body
    pub fn register(&mut self, name: impl Into<String>) {
        let mut task = RegisteredTask::new(name);
        for observer in &self.observers {
            observer(&mut task);
        }
        self.tasks.push(task);
    }

    /// Register a task with a body
    pub fn register_with_action(
        &mut self,
        name: impl Into<String>,
        action: impl Fn(&TaskDescriptor) -> ExecutionResult<()> + 'static,
    ) {
        let mut task = RegisteredTask::new(name);
        task.set_action(action);
        for observer in &self.observers {
            observer(&mut task);
        }
        self.tasks.push(task);
    }

    /// Run a task: all of its pre-actions, then its body
    pub fn run(&self, name: &str) -> Result<()> {
        let task = self
            .find(name)
            .ok_or_else(|| ExecutionError::UnknownTask(name.to_string()))?;
        task.run()
    }

    /// Look up a registered task by name
    pub fn find(&self, name: &str) -> Option<&RegisteredTask> {
        self.tasks.iter().find(|t| t.name() == name)
    }

    /// Check if a task is registered
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Names of all registered tasks, in registration order
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }
}

/// Install a pre-action on every task whose name satisfies a predicate
///
/// `predicate` and `hook` apply per task; the hook receives the task's
/// descriptor when the task is about to run.
pub fn observe_matching<P, H>(graph: &mut TaskGraph, predicate: P, hook: H)
where
    P: Fn(&str) -> bool + 'static,
    H: Fn(&TaskDescriptor) -> SeedResult<()> + Clone + 'static,
{
    graph.when_task_added(move |task| {
        if predicate(task.name()) {
            task.do_first(hook.clone());
        }
    });
}

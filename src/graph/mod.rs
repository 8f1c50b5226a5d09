//! Build task graph surface
//!
//! This module models the slice of a host build system the seeder plugs
//! into: tasks identified by name, registered one at a time, with hooks
//! that run before each task's body.

pub mod registry;
pub mod task;

// Re-export main types
pub use registry::*;
pub use task::*;

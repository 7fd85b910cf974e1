// Port Layer - Interfaces for external dependencies

pub mod queue_store;
pub mod statement;

// Re-exports
pub use queue_store::{ExecOutcome, QueueStore};
pub use statement::{SqlArg, Statement};

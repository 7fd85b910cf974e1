// Domain Layer - Pure business logic and entities

pub mod client;
pub mod error;
pub mod listing;
pub mod queue;

// Re-exports
pub use client::{fold_name, Client, ClientId};
pub use error::DomainError;
pub use listing::{ClientListing, SortColumn, SortOrder};
pub use queue::{Queue, QueueId};

// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Queue ID is required")]
    QueueIdRequired,

    #[error("Queue name is required")]
    QueueNameRequired,

    #[error("Queue ID and name are required")]
    QueueIdAndNameRequired,

    #[error("Queue ID and client name are required")]
    ClientFieldsRequired,

    #[error("Unsupported sort column: {0}")]
    UnsupportedSortColumn(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

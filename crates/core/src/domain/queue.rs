// Queue Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Queue identifier (store-assigned, always > 0 once persisted)
pub type QueueId = i64;

/// A named waiting line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    pub id: QueueId,
    pub name: String,
}

impl Queue {
    pub fn new(id: QueueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Reject identities that can never reference a stored queue
pub fn validate_queue_id(id: QueueId) -> Result<QueueId> {
    if id <= 0 {
        return Err(DomainError::QueueIdRequired);
    }
    Ok(id)
}

/// Trimmed name, or None when nothing is left
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

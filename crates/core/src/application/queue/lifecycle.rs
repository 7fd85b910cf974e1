// Queue Lifecycle Use Cases (create / update / delete)

use super::store_failure;
use crate::domain::queue::{normalize_name, validate_queue_id};
use crate::domain::{DomainError, Queue, QueueId};
use crate::error::Result;
use crate::port::{QueueStore, SqlArg, Statement};
use tracing::{info, warn};

pub const QUEUE_CREATED: &str = "Queue created successfully";
pub const QUEUE_UPDATED: &str = "Queue updated successfully";
pub const QUEUE_DELETED: &str = "Queue deleted successfully";

/// Result of a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQueue {
    pub queue: Queue,
    pub message: String,
}

/// Result of an update or delete.
///
/// `rows_affected == 0` still counts as success; callers see only the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub rows_affected: u64,
    pub message: String,
}

pub async fn create(store: &dyn QueueStore, name: &str) -> Result<CreatedQueue> {
    let name = normalize_name(name).ok_or(DomainError::QueueNameRequired)?;

    let statement = Statement::with_args(
        "INSERT INTO queues (name) VALUES (?1)",
        vec![SqlArg::from(name.as_str())],
    );
    let outcome = store
        .execute(&statement)
        .await
        .map_err(|e| store_failure("create queue", e))?;

    info!(queue_id = outcome.last_insert_id, name = %name, "Queue created");

    Ok(CreatedQueue {
        queue: Queue::new(outcome.last_insert_id, name),
        message: QUEUE_CREATED.to_string(),
    })
}

pub async fn update(store: &dyn QueueStore, id: QueueId, name: &str) -> Result<MutationOutcome> {
    let name = match (validate_queue_id(id), normalize_name(name)) {
        (Ok(_), Some(name)) => name,
        _ => return Err(DomainError::QueueIdAndNameRequired.into()),
    };

    let statement = Statement::with_args(
        "UPDATE queues SET name = ?1 WHERE id = ?2",
        vec![SqlArg::from(name), SqlArg::from(id)],
    );
    let outcome = store
        .execute(&statement)
        .await
        .map_err(|e| store_failure("update queue", e))?;

    if outcome.rows_affected == 0 {
        warn!(queue_id = id, "Update matched no queue");
    } else {
        info!(queue_id = id, "Queue updated");
    }

    Ok(MutationOutcome {
        rows_affected: outcome.rows_affected,
        message: QUEUE_UPDATED.to_string(),
    })
}

pub async fn delete(store: &dyn QueueStore, id: QueueId) -> Result<MutationOutcome> {
    let id = validate_queue_id(id)?;

    let statement = Statement::with_args("DELETE FROM queues WHERE id = ?1", vec![id.into()]);
    let outcome = store
        .execute(&statement)
        .await
        .map_err(|e| store_failure("delete queue", e))?;

    if outcome.rows_affected == 0 {
        warn!(queue_id = id, "Delete matched no queue");
    } else {
        info!(queue_id = id, "Queue deleted");
    }

    Ok(MutationOutcome {
        rows_affected: outcome.rows_affected,
        message: QUEUE_DELETED.to_string(),
    })
}

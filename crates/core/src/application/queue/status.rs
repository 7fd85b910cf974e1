// Queue Status Use Case

use super::compose::compose_client_listing;
use super::store_failure;
use crate::domain::{ClientListing, QueueId};
use crate::error::{AppError, Result};
use crate::port::QueueStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const QUEUE_NOT_FOUND: &str = "Queue not found";
pub const STATUS_RETRIEVED: &str = "Queue status retrieved successfully";
pub const STATUS_RETRIEVED_EMPTY: &str = "Queue status retrieved successfully; no clients matched";

/// Queue status request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueStatusRequest {
    pub queue_id: QueueId,
    #[serde(flatten)]
    pub listing: ClientListing,
}

/// Queue metadata plus the clients waiting in it, in statement order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueStatus {
    pub id: QueueId,
    pub name: String,
    pub clients: Vec<String>,
    pub message: String,
}

/// Execute queue status use case
///
/// Validation and composition happen before the store is touched; then one
/// existence lookup and one listing query run, without a surrounding
/// transaction.
///
/// # Errors
/// - `InvalidArgument` for a non-positive id or an unsupported sort column
/// - `NotFound` if the queue does not exist (the listing is skipped)
/// - `Internal` if either store call fails
pub async fn execute(store: &dyn QueueStore, req: &QueueStatusRequest) -> Result<QueueStatus> {
    let statement = compose_client_listing(req.queue_id, &req.listing)?;

    let queue = store
        .get_queue(req.queue_id)
        .await
        .map_err(|e| store_failure("queue lookup", e))?
        .ok_or_else(|| AppError::NotFound(QUEUE_NOT_FOUND.to_string()))?;

    debug!(queue_id = queue.id, statement = %statement, "Listing queue clients");

    let clients = store
        .list_client_names(&statement)
        .await
        .map_err(|e| store_failure("client listing", e))?;

    let message = if clients.is_empty() {
        STATUS_RETRIEVED_EMPTY
    } else {
        STATUS_RETRIEVED
    };

    Ok(QueueStatus {
        id: queue.id,
        name: queue.name,
        clients,
        message: message.to_string(),
    })
}

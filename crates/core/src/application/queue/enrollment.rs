// Client Enrollment Use Case

use super::status::QUEUE_NOT_FOUND;
use super::store_failure;
use crate::domain::queue::{normalize_name, validate_queue_id};
use crate::domain::{fold_name, Client, DomainError, QueueId};
use crate::error::{AppError, Result};
use crate::port::{QueueStore, SqlArg, Statement};
use tracing::info;

pub const CLIENT_REGISTERED: &str = "Client registered successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredClient {
    pub client: Client,
    pub message: String,
}

/// Add a client to the end of an existing queue
pub async fn register_client(
    store: &dyn QueueStore,
    queue_id: QueueId,
    name: &str,
) -> Result<RegisteredClient> {
    let name = match (validate_queue_id(queue_id), normalize_name(name)) {
        (Ok(_), Some(name)) => name,
        _ => return Err(DomainError::ClientFieldsRequired.into()),
    };

    store
        .get_queue(queue_id)
        .await
        .map_err(|e| store_failure("queue lookup", e))?
        .ok_or_else(|| AppError::NotFound(QUEUE_NOT_FOUND.to_string()))?;

    let statement = Statement::with_args(
        "INSERT INTO clients (queue_id, name, name_folded) VALUES (?1, ?2, ?3)",
        vec![
            SqlArg::from(queue_id),
            SqlArg::from(name.as_str()),
            SqlArg::from(fold_name(&name)),
        ],
    );
    let outcome = store
        .execute(&statement)
        .await
        .map_err(|e| store_failure("register client", e))?;

    info!(queue_id, client_id = outcome.last_insert_id, "Client registered");

    Ok(RegisteredClient {
        client: Client {
            id: outcome.last_insert_id,
            queue_id,
            name,
        },
        message: CLIENT_REGISTERED.to_string(),
    })
}

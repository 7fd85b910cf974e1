//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results. Missing required
//! fields default to empty values so validation, not parsing, rejects them.

use serde::{Deserialize, Serialize};

/// queue.create.v1 - Create a queue
#[derive(Debug, Deserialize)]
pub struct CreateQueueRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQueueResponse {
    pub success: bool,
    pub id: i64,
    pub message: String,
}

/// queue.update.v1 - Rename a queue
#[derive(Debug, Deserialize)]
pub struct UpdateQueueRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// queue.update.v1 / queue.delete.v1 result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

/// queue.delete.v1 - Delete a queue
#[derive(Debug, Deserialize)]
pub struct DeleteQueueRequest {
    #[serde(default)]
    pub id: i64,
}

/// queue.status.v1 - Queue metadata and waiting clients
#[derive(Debug, Deserialize)]
pub struct QueueStatusRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub client_name_filter: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStatusResponse {
    pub success: bool,
    pub id: i64,
    pub name: String,
    pub clients: Vec<String>,
    pub message: String,
}

/// client.register.v1 - Add a client to a queue
#[derive(Debug, Deserialize)]
pub struct RegisterClientRequest {
    #[serde(default)]
    pub queue_id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterClientResponse {
    pub success: bool,
    pub client_id: i64,
    pub message: String,
}
